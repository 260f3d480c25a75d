//! Property: a URL with every non-credential component set rebuilds to itself.

use proptest::prelude::*;
use urlkit_core::UrlValue;

fn total_url() -> impl Strategy<Value = String> {
    (
        "[a-z][a-z0-9+.-]{0,6}",
        "[a-z][a-z0-9]{0,10}(\\.[a-z]{2,6}){0,2}",
        "[a-zA-Z_-][a-zA-Z0-9_.-]{0,8}(/[a-zA-Z0-9_-]{1,8}){0,3}",
        "[a-z][a-z0-9=&]{0,11}",
        "[a-z][a-zA-Z0-9-]{0,8}",
    )
        .prop_map(|(scheme, host, path, query, fragment)| {
            format!("{scheme}://{host}/{path}?{query}#{fragment}")
        })
}

proptest! {
    #[test]
    fn build_reproduces_total_url(input in total_url()) {
        let v = UrlValue::parse(&input).unwrap();
        prop_assert_eq!(v.build_url().unwrap(), input);
    }

    #[test]
    fn one_setter_changes_one_field(input in total_url(), host in "[a-z]{1,12}") {
        let before = UrlValue::parse(&input).unwrap();
        let mut after = before.clone();
        after.set_host(host.clone());
        prop_assert_eq!(after.host(), Some(host.as_str()));
        prop_assert_eq!(after.scheme(), before.scheme());
        prop_assert_eq!(after.port(), before.port());
        prop_assert_eq!(after.path(), before.path());
        prop_assert_eq!(after.query(), before.query());
        prop_assert_eq!(after.fragment(), before.fragment());
        prop_assert_eq!(after.url(), before.url());
    }
}
