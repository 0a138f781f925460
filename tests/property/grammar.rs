use podlint::primitives::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn port_bounds_are_exclusive(n in any::<i64>()) {
        prop_assert_eq!(is_port(n), n > 0 && n < 65536);
    }

    #[test]
    fn memory_quantities_accepted(n in 0u64..=999999, unit in prop::sample::select(vec!["Ki", "Mi", "Gi"])) {
        let value = format!("{}{}", n, unit);
        prop_assert!(is_memory_quantity(&value), "{:?} should be accepted", value);
    }

    #[test]
    fn memory_other_units_rejected(n in 0u64..=999999, unit in "(K|M|G|T|Ti|KB|MB|GB|k|m)?") {
        let value = format!("{}{}", n, unit);
        prop_assert!(!is_memory_quantity(&value), "{:?} should be rejected", value);
    }

    #[test]
    fn snake_case_names_accepted(name in "[a-z][a-z0-9]{0,7}(_[a-z0-9]{1,4}){0,3}") {
        prop_assert!(is_container_name(&name));
    }

    #[test]
    fn names_with_uppercase_rejected(prefix in "[a-z]{0,4}", upper in "[A-Z]", suffix in "[a-z]{0,4}") {
        let name = format!("{}{}{}", prefix, upper, suffix);
        prop_assert!(!is_container_name(&name));
    }

    #[test]
    fn tagged_registry_images_accepted(
        path in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        tag in "[a-z0-9.]{1,8}",
    ) {
        let image = format!("{}{}:{}", IMAGE_REGISTRY, path, tag);
        prop_assert!(is_image_reference(&image), "{:?} should be accepted", image);
    }

    #[test]
    fn untagged_images_rejected(path in "[a-z]{1,8}(/[a-z]{1,8}){0,2}") {
        let image = format!("{}{}", IMAGE_REGISTRY, path);
        prop_assert!(!is_image_reference(&image));
        let trailing = format!("{}:", image);
        prop_assert!(!is_image_reference(&trailing));
    }

    #[test]
    fn cpu_accepts_decimal_integers(n in any::<i32>()) {
        prop_assert_eq!(parse_cpu(&n.to_string()), Some(n as i64));
    }
}
