use heritage_kernel::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Mural,
    Scroll,
    Bell,
}

#[derive(Debug, Clone)]
struct Record {
    title: String,
    place: String,
    kind: Kind,
}

impl Searchable for Record {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.place.as_str()].into_iter()
    }
}

impl Categorized for Record {
    type Category = Kind;

    fn category(&self) -> Kind {
        self.kind
    }
}

const DEFS: &[FilterDef<Kind>] = &[
    FilterDef::all("All"),
    FilterDef::only("mural", "Murals", Kind::Mural),
    FilterDef::only("scroll", "Scrolls", Kind::Scroll),
];

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Mural), Just(Kind::Scroll), Just(Kind::Bell)]
}

fn record() -> impl Strategy<Value = Record> {
    ("[a-cA-C ]{0,8}", "[a-cA-C]{0,5}", kind())
        .prop_map(|(title, place, kind)| Record { title, place, kind })
}

fn filter_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("all"), Just("mural"), Just("scroll"), Just("bell")]
}

fn expected(record: &Record, search: &str, id: &str) -> bool {
    let needle = search.to_lowercase();
    let text_ok = record.title.to_lowercase().contains(&needle)
        || record.place.to_lowercase().contains(&needle);
    let category_ok = match id {
        "all" => true,
        "mural" => record.kind == Kind::Mural,
        "scroll" => record.kind == Kind::Scroll,
        _ => false,
    };
    text_ok && category_ok
}

proptest! {
    #[test]
    fn result_is_the_ordered_subsequence_of_matches(
        records in prop::collection::vec(record(), 0..24),
        search in "[a-cA-C]{0,3}",
        id in filter_id(),
    ) {
        let mut query = ListQuery::default();
        query.set_search(search.clone());
        query.select_filter(id, DEFS);

        let got: Vec<*const Record> = query.apply(&records).into_iter().map(std::ptr::from_ref).collect();
        let want: Vec<*const Record> = records
            .iter()
            .filter(|r| expected(r, &search, id))
            .map(std::ptr::from_ref)
            .collect();

        prop_assert_eq!(got, want);
    }

    #[test]
    fn empty_search_with_all_keeps_everything(records in prop::collection::vec(record(), 0..24)) {
        let query = ListQuery::<Kind>::default();
        prop_assert_eq!(query.apply(&records).len(), records.len());
    }

    #[test]
    fn counts_match_category_sizes(records in prop::collection::vec(record(), 0..24)) {
        for def in DEFS {
            let want = records
                .iter()
                .filter(|r| def.category.is_none_or(|c| c == r.kind))
                .count();
            prop_assert_eq!(def.count(&records), want);
        }
    }
}
