use pakstage::config::ConfigWarning;

pub fn format_config_warning(w: &ConfigWarning) -> String {
    let mut out = match w.line {
        Some(line) => format!(
            "⚠ Unknown config key '{}' in {}:{}\n",
            w.key,
            w.file.display(),
            line
        ),
        None => format!("⚠ Unknown config key '{}' in {}\n", w.key, w.file.display()),
    };

    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprint!("{}", format_config_warning(w));
    }
}
