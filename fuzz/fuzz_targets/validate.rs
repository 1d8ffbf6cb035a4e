#![no_main]

use eofscope::{validate_eof, EofContainer, Error, Revision};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let verdict = validate_eof(Revision::Shanghai, data);
    assert_eq!(verdict, validate_eof(Revision::Shanghai, data));

    match EofContainer::parse(Revision::Shanghai, data) {
        Ok(_) | Err(Error::Malformed { .. }) => assert!(verdict.is_success()),
        Err(Error::Rejected(rejected)) => assert_eq!(rejected, verdict),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
