use chrono::Datelike;
use kallari_site::registry::Link;
use yew::prelude::*;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright(year: i32, name: &str) -> String {
    format!("© {year} {name} — Asociación Civil")
}

/// Render a plain link.
pub fn link(link: &Link, class: &'static str) -> Html {
    html!(<a href={link.target.href()} {class}>{ link.label }</a>)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(
            copyright(2025, "KALLARI"),
            "© 2025 KALLARI — Asociación Civil"
        );
    }

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
