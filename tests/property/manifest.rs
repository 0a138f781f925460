use podlint::parse::parse;
use podlint::validate::validate;
use proptest::prelude::*;

fn pod(containers: &str) -> String {
    format!(
        "apiVersion: v1\nkind: Pod\nmetadata:\n  name: x\nspec:\n  containers:\n{}",
        containers
    )
}

fn container(name: &str, port: i64) -> String {
    format!(
        "    - name: {}\n      image: registry.bigbrother.io/app:v1\n      ports:\n        - containerPort: {}\n      resources: {{}}\n",
        name, port
    )
}

fn messages(input: &str) -> Vec<String> {
    let node = parse(input).expect("parse should succeed");
    validate("pod.yaml", &node)
        .errors
        .into_iter()
        .map(|e| e.message)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ports_in_range_are_valid(port in 1i64..65536) {
        let errs = messages(&pod(&container("web", port)));
        prop_assert!(errs.is_empty(), "port {} got {:?}", port, errs);
    }

    #[test]
    fn ports_out_of_range_yield_one_error(
        port in prop_oneof![-100000i64..=0, 65536i64..1000000],
    ) {
        let errs = messages(&pod(&container("web", port)));
        prop_assert_eq!(errs, vec!["containers.ports.containerPort value out of range".to_string()]);
    }

    #[test]
    fn duplicates_reported_after_first(copies in 1usize..6) {
        let body: String = (0..copies).map(|_| container("web", 80)).collect();
        let errs = messages(&pod(&body));
        prop_assert_eq!(errs.len(), copies - 1);
        prop_assert!(errs.iter().all(|m| m == "containers.name has invalid format 'web'"));
    }

    #[test]
    fn arbitrary_input_never_panics_and_is_stable(input in "[a-zA-Z0-9:_ \\-\\n\\[\\]{},\"']{0,120}") {
        if let Ok(node) = parse(&input) {
            let first = validate("pod.yaml", &node);
            let second = validate("pod.yaml", &node);
            prop_assert!(!first.errors.is_empty());
            prop_assert_eq!(first, second);
        }
    }
}
