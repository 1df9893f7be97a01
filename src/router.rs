//! View router: the root owner of the current route.
//!
//! Holds the `PageStore`, renders the matching view into `<main>`, keeps the
//! nav bar's active link in sync, scrolls to the top and mounts the hero
//! background only while the home view is showing.

use crate::constants::{FOOTER_ID, HERO_ID, MAIN_ID, NAV_ID};
use crate::core::views;
use crate::core::{HeroConfig, Page, PageStore, Route};
use crate::dom;
use crate::events::{clicks, EventListener};
use crate::hero::HeroSlot;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Router {
    pub store: Rc<RefCell<PageStore>>,
    _listeners: Vec<EventListener>,
}

struct Shell {
    document: web::Document,
    nav: web::Element,
    main: web::Element,
    hero: Rc<RefCell<HeroSlot>>,
    hero_config: HeroConfig,
}

impl Shell {
    fn show(&self, route: Route) {
        self.nav.set_inner_html(&views::nav(route));
        // Unknown routes leave <main> empty.
        self.main
            .set_inner_html(&views::render(route).unwrap_or_default());
        if route == Some(Page::Home) {
            if let Some(container) = self.document.get_element_by_id(HERO_ID) {
                HeroSlot::mount(&self.hero, container, &self.hero_config);
            }
        }
    }

    fn on_change(&self, prev: Route, next: Route) {
        if prev == Some(Page::Home) {
            HeroSlot::unmount(&self.hero);
        }
        self.show(next);
        if let Some(w) = web::window() {
            dom::scroll_to_top_smooth(&w);
        }
    }
}

impl Router {
    pub fn mount(document: &web::Document, hero_config: HeroConfig) -> anyhow::Result<Self> {
        let nav = document
            .get_element_by_id(NAV_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{NAV_ID}"))?;
        let main = document
            .get_element_by_id(MAIN_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{MAIN_ID}"))?;
        if let Some(footer) = document.get_element_by_id(FOOTER_ID) {
            footer.set_inner_html(&views::footer());
        }

        let shell = Shell {
            document: document.clone(),
            nav,
            main,
            hero: Rc::new(RefCell::new(HeroSlot::default())),
            hero_config,
        };
        let store = Rc::new(RefCell::new(PageStore::default()));
        shell.show(store.borrow().current());
        store
            .borrow_mut()
            .subscribe(move |prev, next| shell.on_change(prev, next));

        let listeners = clicks::wire_document(document, store.clone())?;
        Ok(Self {
            store,
            _listeners: listeners,
        })
    }
}
