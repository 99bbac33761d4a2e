//! Unit tests for the result cache and key construction

use super::*;

use proptest::prelude::*;

use npmq_core::SortBy;

fn create_test_info() -> PackageInfo {
    PackageInfo {
        name: "test-package".to_string(),
        version: "1.0.0".to_string(),
        description: Some("A test package".to_string()),
        author: Some("Tester".to_string()),
        homepage: None,
        repository: None,
        dependencies: Default::default(),
    }
}

#[test]
fn test_cache_entry_creation() {
    let entry = CacheEntry::new(create_test_info());

    assert_eq!(entry.value.name, "test-package");
    assert_eq!(entry.ttl, DEFAULT_TTL);
    assert!(entry.is_fresh());
}

#[test]
fn test_cache_entry_with_custom_ttl() {
    let ttl = Duration::from_secs(30);
    let entry = CacheEntry::with_ttl(create_test_info(), ttl);

    assert_eq!(entry.ttl, ttl);
    assert!(entry.is_fresh());
}

#[test]
fn test_cache_entry_age() {
    let entry = CacheEntry::new(create_test_info());

    let age = entry.age();
    assert!(age.is_some());
    assert!(age.unwrap() < Duration::from_millis(100)); // Should be very recent
}

#[test]
fn test_ttl_cache_insert_and_get() {
    let cache = TtlCache::new();

    cache.insert("package-info:test-package".to_string(), create_test_info());

    let retrieved = cache.get("package-info:test-package");
    assert!(retrieved.is_some());
    assert_eq!(retrieved.unwrap().name, "test-package");
}

#[test]
fn test_ttl_cache_get_nonexistent() {
    let cache: TtlCache<PackageInfo> = TtlCache::new();

    assert!(cache.get("package-info:nonexistent").is_none());
}

#[test]
fn test_ttl_cache_overwrite() {
    let cache = TtlCache::new();
    let mut info = create_test_info();

    cache.insert("package-info:test-package".to_string(), info.clone());

    info.version = "2.0.0".to_string();
    cache.insert("package-info:test-package".to_string(), info);

    let retrieved = cache.get("package-info:test-package").unwrap();
    assert_eq!(retrieved.version, "2.0.0");
    assert_eq!(cache.stats().total_entries, 1);
}

#[test]
fn test_expired_entry_evicted_on_read() {
    let cache = TtlCache::new();

    cache.insert_with_ttl(
        "package-info:test-package".to_string(),
        create_test_info(),
        Duration::from_nanos(1),
    );
    std::thread::sleep(Duration::from_millis(1));

    assert!(cache.get("package-info:test-package").is_none());
    // The stale entry was removed as a side effect of the read
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn test_ttl_cache_contains_fresh() {
    let cache = TtlCache::new();

    assert!(!cache.contains_fresh("package-info:test-package"));

    cache.insert("package-info:test-package".to_string(), create_test_info());
    assert!(cache.contains_fresh("package-info:test-package"));
}

#[test]
fn test_cache_stats() {
    let cache = TtlCache::new();

    let stats = cache.stats();
    assert_eq!(stats.total_entries, 0);
    assert_eq!(stats.fresh_entries, 0);
    assert_eq!(stats.stale_entries, 0);

    cache.insert("package-info:one".to_string(), create_test_info());
    cache.insert("package-info:two".to_string(), create_test_info());

    let stats = cache.stats();
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.fresh_entries, 2);
    assert_eq!(stats.stale_entries, 0);
}

#[test]
fn test_cache_clear() {
    let cache = TtlCache::new();

    cache.insert("package-info:test-package".to_string(), create_test_info());
    assert!(cache.contains_fresh("package-info:test-package"));

    cache.clear();
    assert!(!cache.contains_fresh("package-info:test-package"));
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn test_cache_cleanup() {
    let cache = TtlCache::new();

    cache.insert_with_ttl(
        "package-info:stale".to_string(),
        create_test_info(),
        Duration::from_nanos(1),
    );
    cache.insert("package-info:fresh".to_string(), create_test_info());
    std::thread::sleep(Duration::from_millis(1));

    let removed = cache.cleanup();
    assert_eq!(removed, 1);
    assert_eq!(cache.stats().total_entries, 1);
}

#[test]
fn test_registry_cache_default() {
    let cache = RegistryCache::default();
    assert_eq!(cache.packages.stats().total_entries, 0);
    assert_eq!(cache.searches.stats().total_entries, 0);
    assert_eq!(cache.downloads.stats().total_entries, 0);
}

#[test]
fn test_search_key_includes_set_options_only() {
    let plain = key::search("react", &Default::default());
    assert_eq!(plain, "search:text=react");

    let options = npmq_core::SearchOptions {
        size: Some(10),
        sort_by: Some(SortBy::Downloads),
        ..Default::default()
    };
    assert_eq!(
        key::search("react", &options),
        "search:text=react&size=10&sortBy=downloads"
    );
}

#[test]
fn test_search_key_cannot_be_forged_by_query_text() {
    // A query containing option-like text must not collide with a request
    // that actually set those options
    let sized = npmq_core::SearchOptions {
        size: Some(10),
        ..Default::default()
    };
    assert_ne!(
        key::search("react&size=10", &Default::default()),
        key::search("react", &sized)
    );
    assert_ne!(
        key::search("react|size=10", &Default::default()),
        key::search("react", &sized)
    );

    // An option value containing delimiter text cannot impersonate a later
    // option either
    let forged_sort = npmq_core::SearchOptions {
        sort_by: Some(SortBy::Other("quality&size=10".to_string())),
        ..Default::default()
    };
    let honest = npmq_core::SearchOptions {
        size: Some(10),
        sort_by: Some(SortBy::Quality),
        ..Default::default()
    };
    assert_ne!(
        key::search("react", &forged_sort),
        key::search("react", &honest)
    );
}

#[test]
fn test_keys_normalize_whitespace() {
    assert_eq!(key::package_info("  react "), key::package_info("react"));
    assert_eq!(
        key::download_stats(" react", npmq_core::DownloadPeriod::LastWeek),
        "downloads:last-week:react"
    );
}

proptest! {
    #[test]
    fn prop_equivalent_requests_share_a_key(name in "[a-z@/-]{1,30}") {
        prop_assert_eq!(key::package_info(&name), key::package_info(&name));
    }

    #[test]
    fn prop_operations_never_collide(name in "[a-z@/-]{1,30}") {
        let info = key::package_info(&name);
        let search = key::search(&name, &Default::default());
        let downloads = key::download_stats(&name, npmq_core::DownloadPeriod::LastMonth);
        prop_assert_ne!(info.clone(), search.clone());
        prop_assert_ne!(info, downloads.clone());
        prop_assert_ne!(search, downloads);
    }

    #[test]
    fn prop_distinct_sizes_get_distinct_keys(a in proptest::option::of(0u32..100), b in proptest::option::of(0u32..100)) {
        let key_a = key::search("react", &npmq_core::SearchOptions { size: a, ..Default::default() });
        let key_b = key::search("react", &npmq_core::SearchOptions { size: b, ..Default::default() });
        prop_assert_eq!(a == b, key_a == key_b);
    }
}
