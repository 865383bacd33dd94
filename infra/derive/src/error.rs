use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, spanned::Spanned};

const CONTEXT_FIELD: &str = "context";
const SOURCE_FIELD: &str = "source";
const INTERNAL_VARIANT: &str = "Internal";

/// Parsed view of an annotated error enum.
struct ErrorEnum<'a> {
    ident: &'a Ident,
    variants: Vec<ErrorVariant<'a>>,
    derives: FxHashSet<String>,
}

struct ErrorVariant<'a> {
    ident: &'a Ident,
    cfgs: Vec<&'a Attribute>,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
}

pub(crate) fn expand(input: &DeriveInput) -> TokenStream {
    match ErrorEnum::parse(input) {
        Ok(model) => model.emit(input),
        Err(err) => err.to_compile_error(),
    }
}

impl<'a> ErrorEnum<'a> {
    fn parse(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new(input.span(), "heritage_error can only be applied to enums"));
        };

        let variants = data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<_>>()?;

        Ok(Self { ident: &input.ident, variants, derives: derived_traits(&input.attrs) })
    }

    fn emit(&self, input: &DeriveInput) -> TokenStream {
        let derive = self.missing_derives();
        let context_trait = self.context_trait();
        let source_impls = self.variants.iter().filter_map(|v| self.source_impl(v));
        let internal_impls = self.internal_impls();

        quote! {
            #[allow(non_shorthand_field_patterns)]
            #derive
            #input

            #context_trait
            #(#source_impls)*
            #internal_impls

            #[allow(dead_code)]
            fn format_context(
                context: &Option<std::borrow::Cow<'static, str>>,
            ) -> std::borrow::Cow<'static, str> {
                match context {
                    Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                    None => std::borrow::Cow::Borrowed(""),
                }
            }
        }
    }

    fn missing_derives(&self) -> TokenStream {
        let mut wanted = Vec::new();
        if !self.derives.contains("Debug") {
            wanted.push(quote!(Debug));
        }
        if !self.derives.contains("Error") {
            wanted.push(quote!(::thiserror::Error));
        }
        if wanted.is_empty() { quote!() } else { quote!(#[derive(#(#wanted),*)]) }
    }

    fn ext_ident(&self) -> Ident {
        format_ident!("{}Ext", self.ident)
    }

    fn context_trait(&self) -> TokenStream {
        let name = self.ident;
        let ext = self.ext_ident();
        let arms = self.variants.iter().filter(|v| v.has_context).map(|v| {
            let cfgs = &v.cfgs;
            let ident = v.ident;
            quote! { #(#cfgs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
        });

        quote! {
            pub trait #ext<T> {
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
            }

            #[automatically_derived]
            impl<T> #ext<T> for Result<T, #name> {
                #[inline]
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                    self.map_err(|mut err| {
                        match &mut err {
                            #(#arms)*
                            _ => {}
                        }
                        err
                    })
                }
            }
        }
    }

    fn source_impl(&self, variant: &ErrorVariant<'_>) -> Option<TokenStream> {
        if variant.ident == INTERNAL_VARIANT {
            return None;
        }
        let (field, ty) = variant.source?;
        let name = self.ident;
        let ext = self.ext_ident();
        let ident = variant.ident;
        let cfgs = &variant.cfgs;

        Some(quote! {
            #(#cfgs)*
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #(#cfgs)*
            #[automatically_derived]
            impl<T> #ext<T> for std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<std::borrow::Cow<'static, str>>,
                ) -> std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    }

    fn internal_impls(&self) -> TokenStream {
        let Some(internal) = self.variants.iter().find(|v| v.ident == INTERNAL_VARIANT) else {
            return quote!();
        };
        let name = self.ident;
        let cfgs = &internal.cfgs;

        quote! {
            #(#cfgs)*
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfgs)*
            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    }
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "heritage_error variants must use named fields",
            ));
        };

        let mut source = None;
        let mut has_context = false;

        for field in &fields.named {
            let Some(ident) = &field.ident else { continue };

            if ident == CONTEXT_FIELD {
                if !is_cow_context(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if source.is_none() && is_source(ident, field) {
                source = Some((ident, &field.ty));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants with a source need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            cfgs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
            source,
            has_context,
        })
    }
}

fn is_source(ident: &Ident, field: &Field) -> bool {
    ident == SOURCE_FIELD
        || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

/// Compares the normalized token text, accepting any path prefix before `Cow`.
fn is_cow_context(ty: &Type) -> bool {
    let text: String = quote!(#ty).to_string().chars().filter(|c| !c.is_whitespace()).collect();
    text.starts_with("Option<") && text.ends_with("Cow<'static,str>>")
}

fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                names.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    names
}
