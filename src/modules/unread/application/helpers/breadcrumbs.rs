use crate::unread::application::domain::entities::Breadcrumb;

/// Prefix a crumb trail with the Home crumb. The last crumb stays a plain
/// label; the template does not link the page to itself.
pub fn build_breadcrumbs(relative_path: &str, crumbs: Vec<Breadcrumb>) -> Vec<Breadcrumb> {
    let home_url = if relative_path.is_empty() {
        "/".to_string()
    } else {
        relative_path.to_string()
    };

    let mut trail = vec![Breadcrumb::link("[[global:home]]", &home_url)];
    trail.extend(crumbs);
    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_home_crumb() {
        let trail = build_breadcrumbs("", vec![Breadcrumb::label("[[unread:title]]")]);

        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].text, "[[global:home]]");
        assert_eq!(trail[0].url.as_deref(), Some("/"));
        assert_eq!(trail[1].text, "[[unread:title]]");
        assert!(trail[1].url.is_none());
    }

    #[test]
    fn home_crumb_uses_the_base_path_when_set() {
        let trail = build_breadcrumbs("/forum", vec![]);

        assert_eq!(trail[0].url.as_deref(), Some("/forum"));
    }
}
