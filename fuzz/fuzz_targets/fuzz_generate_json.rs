#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = serde_json::from_slice::<sepa_xml::SepaDocument>(data) {
        // Errors are fine, panics are not.
        let _ = sepa_xml::generate_sepa_xml(&doc);
        let _ = sepa_xml::validate_document(&doc);
    }
});
