use stylist::{css, StyleSource};

use crate::config::MODAL_ENTER_MS;

pub const ACCENT: &str = "#EF253C";
pub const TITLE_GREY: &str = "#D7D6D7";

/// Page-wide rules: palette variables, fonts and the overlay keyframes.
pub fn global_css() -> String {
    format!(
        r#"
        :root {{
            --dark-card-bg: rgba(40, 39, 40, 0.25);
            --red-card-bg: rgba(239, 37, 60, 0.70);
        }}
        html, body {{
            margin: 0;
            background-color: #121212;
        }}
        * {{
            box-sizing: border-box;
        }}
        .font-cal-sans {{ font-family: 'Cal Sans', sans-serif; }}
        .font-montserrat-alt {{ font-family: 'Montserrat Alternates', sans-serif; }}
        @keyframes overlay-fade-in {{
            from {{ opacity: 0; }}
            to {{ opacity: 1; }}
        }}
        @keyframes overlay-rise-in {{
            from {{ transform: translateY(20px) scale(0.9); }}
            to {{ transform: translateY(0) scale(1); }}
        }}
        .overlay-enter {{
            animation: overlay-fade-in {ms}ms ease-out;
        }}
        .overlay-body-enter {{
            animation: overlay-rise-in {ms}ms ease-out;
        }}
        .hover-group .rotate-on-hover {{
            transition: transform 300ms;
        }}
        .hover-group:hover .rotate-on-hover {{
            transform: rotate(45deg);
        }}
        "#,
        ms = MODAL_ENTER_MS,
    )
}

pub fn dark_card() -> StyleSource {
    css!(
        r#"
        background: var(--dark-card-bg);
        backdrop-filter: blur(4px);
        border-radius: 1rem;
        "#
    )
}

pub fn red_card() -> StyleSource {
    css!(
        r#"
        background: var(--red-card-bg);
        backdrop-filter: blur(4px);
        border-radius: 1rem;
        "#
    )
}
