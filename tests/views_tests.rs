// Host-side tests for routing and page markup.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod form {
        include!("../src/core/form.rs");
    }
    pub mod page {
        include!("../src/core/page.rs");
    }
    pub mod views {
        include!("../src/core/views.rs");
    }
}

use crate::core::form::FIELD_NAMES;
use crate::core::page::*;
use crate::core::views;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[test]
fn every_page_renders_distinct_markup() {
    let mut seen = HashSet::new();
    for page in Page::ALL {
        let html = views::render(Some(page)).expect("known page renders");
        assert!(!html.is_empty(), "{page} is empty");
        assert!(seen.insert(html), "{page} duplicates another page");
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn unknown_route_renders_nothing() {
    assert_eq!(route_for_id("careers"), None);
    assert_eq!(views::render(route_for_id("careers")), None);
    assert!("careers".parse::<Page>().is_err());
}

#[test]
fn ids_round_trip() {
    for page in Page::ALL {
        assert_eq!(page.id().parse::<Page>(), Ok(page));
        assert_eq!(page.to_string(), page.id());
    }
    assert_eq!(Page::Join.label(), "Join Us");
}

#[test]
fn store_notifies_on_change_only() {
    let log: Rc<RefCell<Vec<(Route, Route)>>> = Rc::default();
    let mut store = PageStore::default();
    assert_eq!(store.current(), Some(Page::Home));
    let sink = log.clone();
    store.subscribe(move |prev, next| sink.borrow_mut().push((prev, next)));

    assert!(store.navigate(Some(Page::About)));
    assert!(!store.navigate(Some(Page::About)));
    assert!(store.navigate_id("team"));
    assert!(store.navigate_id("nowhere"));
    assert_eq!(store.current(), None);
    assert!(!store.navigate_id("nowhere"));

    assert_eq!(
        *log.borrow(),
        vec![
            (Some(Page::Home), Some(Page::About)),
            (Some(Page::About), Some(Page::Team)),
            (Some(Page::Team), None),
        ]
    );
}

#[test]
fn team_and_about_lead_to_join() {
    for page in [Page::About, Page::Team] {
        let html = views::render_page(page);
        assert!(html.contains(r#"data-nav="join""#), "{page} has no join link");
    }
}

#[test]
fn home_hosts_the_hero_and_links_to_projects() {
    let html = views::render_page(Page::Home);
    assert!(html.contains(r#"<section id="hero""#));
    assert!(html.contains(r#"data-nav="projects""#));
}

#[test]
fn join_page_carries_the_form() {
    let html = views::render_page(Page::Join);
    assert!(html.contains(r#"<form id="application-form""#));
    for name in FIELD_NAMES {
        assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
    }
    assert!(html.contains(r#"id="form-email-error""#));
    assert!(html.contains(r#"id="form-status""#));
}

#[test]
fn gallery_images_open_the_lightbox() {
    let html = views::render_page(Page::Gallery);
    assert!(html.contains("data-lightbox="));
}

#[test]
fn nav_marks_only_the_current_page() {
    let html = views::nav(Some(Page::Team));
    assert!(html.contains(r#"class="nav-link active" data-nav="team""#));
    assert_eq!(html.matches("active").count(), 1);
    assert_eq!(views::nav(None).matches("active").count(), 0);
    for page in Page::ALL {
        assert!(html.contains(&format!(r#"data-nav="{}""#, page.id())));
    }
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        views::escape(r#"<a href="x">&'"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
    assert_eq!(views::escape("plain"), "plain");
}
