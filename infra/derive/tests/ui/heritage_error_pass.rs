use heritage_derive::heritage_error;
use std::borrow::Cow;

#[heritage_error]
pub enum CatalogError {
    #[error("Io error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, CatalogError> {
    std::fs::read_to_string("catalog.toml").context("Reading catalog")
}

fn main() {
    let _ = read();
}
