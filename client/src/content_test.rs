use super::*;

#[test]
fn nav_links_start_at_home_and_are_unique() {
    assert_eq!(NAV_LINKS[0].href, "/");
    for (i, a) in NAV_LINKS.iter().enumerate() {
        for b in &NAV_LINKS[i + 1..] {
            assert_ne!(a.href, b.href);
        }
    }
}

#[test]
fn nav_links_are_absolute_without_trailing_slash() {
    for link in NAV_LINKS.iter().skip(1) {
        assert!(link.href.starts_with('/'));
        assert!(!link.href.ends_with('/'));
    }
}

#[test]
fn testimonial_ratings_fit_five_stars() {
    assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
}

#[test]
fn step_numbers_are_sequential() {
    let numbers = STEPS.iter().map(|s| s.number).collect::<Vec<_>>();
    assert_eq!(numbers, vec!["01", "02", "03"]);
}
