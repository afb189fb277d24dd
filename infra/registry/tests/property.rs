use abet_registry::{Registry, StaticSource, normalize_domain};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in "((?i)www\\.){0,3}[A-Za-z0-9.]{0,30}") {
        let once = normalize_domain(&raw);
        let twice = normalize_domain(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.starts_with("www."));
        prop_assert_eq!(once.to_lowercase(), once.clone());
    }

    #[test]
    fn lookups_ignore_case_and_www(host in "[a-v][a-z0-9-]{0,20}\\.(com|com\\.br|bet\\.br)") {
        let registry = Registry::builder().source(StaticSource::new([host.clone()])).build();

        prop_assert!(registry.is_authorized(&host));
        prop_assert!(registry.is_authorized(&host.to_uppercase()));
        let prefixed = format!("WWW.{host}");
        prop_assert!(registry.is_authorized(&prefixed));
    }
}
