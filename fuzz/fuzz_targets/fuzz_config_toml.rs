#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing should never panic, and the effective display
        // format must always be usable.
        if let Ok(config) = toml::from_str::<pakstage::Config>(content) {
            let format = config.schedule.effective_display_format();
            assert!(pakstage::domain::value_objects::schedule::is_valid_display_format(format));
        }
    }
});
