//! Routes the host must pre-render.
//!
//! A static host serves `/docs/<slug>` from `docs/<slug>/index.html`, so the
//! route and the output file are derived from the same slug here.

use crate::repository::Repository;
use std::path::PathBuf;

/// The document listing.
pub const LISTING_ROUTE: &str = "/";

/// Every document slug, in listing order. No filtering, no pagination.
pub fn static_paths(repo: &Repository) -> Vec<String> {
    repo.all().iter().map(|doc| doc.slug.clone()).collect()
}

pub fn route(slug: &str) -> String {
    format!("/docs/{slug}")
}

/// Output file for a document route, relative to the output directory.
pub fn page_file(slug: &str) -> PathBuf {
    PathBuf::from("docs").join(slug).join("index.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::*;
    use std::path::Path;

    #[test]
    fn every_static_path_resolves() {
        let tmp = setup_fixtures();
        let repo = Repository::build(tmp.path(), &SiteConfig::default()).unwrap();

        let paths = static_paths(&repo);
        assert_eq!(paths.len(), repo.len());
        for slug in &paths {
            assert_eq!(&repo.get(slug).unwrap().slug, slug);
        }
    }

    #[test]
    fn route_and_file_share_the_slug() {
        assert_eq!(route("spring-boot-setup"), "/docs/spring-boot-setup");
        assert_eq!(
            page_file("spring-boot-setup"),
            Path::new("docs/spring-boot-setup/index.html")
        );
    }

    #[test]
    fn empty_repository_has_no_paths() {
        assert!(static_paths(&Repository::default()).is_empty());
    }
}
