use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Width of the attached terminal, or 0 if stdout is not a terminal.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Chart settings for `rs` under `config`, sized to the terminal.
pub fn chart_config(rs: base::Recordset, config: &base::Config) -> base::chart::Config {
    base::chart::Config {
        charset: charset_from_config(config),
        term_width: term_width(),
        rs,
    }
}
