#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let node = match podlint::parse(&s) {
        Ok(n) => n,
        Err(_) => return,
    };

    let first = podlint::validate("fuzz.yaml", &node);
    let second = podlint::validate("fuzz.yaml", &node);

    // Validation is a pure function of the tree.
    if first != second {
        panic!(
            "Validation is not deterministic.\n\
             Input (lossy): {:?}\n\
             First: {:?}\n\
             Second: {:?}",
            s.get(..200).unwrap_or(&s),
            first.errors,
            second.errors,
        );
    }
});
