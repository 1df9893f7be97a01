use std::fmt;
use std::str::FromStr;

/// The eight views of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Team,
    Join,
    Sponsors,
    Gallery,
    Blog,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Team,
        Page::Join,
        Page::Sponsors,
        Page::Gallery,
        Page::Blog,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Team => "team",
            Page::Join => "join",
            Page::Sponsors => "sponsors",
            Page::Gallery => "gallery",
            Page::Blog => "blog",
        }
    }

    /// Label used by the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Team => "Team",
            Page::Join => "Join Us",
            Page::Sponsors => "Sponsors",
            Page::Gallery => "Gallery",
            Page::Blog => "Blog",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown page identifier {0:?}")]
pub struct PageParseError(pub String);

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| PageParseError(s.to_string()))
    }
}

/// What the router shows. `None` is an identifier outside the known set;
/// it renders nothing.
pub type Route = Option<Page>;

#[inline]
pub fn route_for_id(id: &str) -> Route {
    id.parse().ok()
}

type Listener = Box<dyn FnMut(Route, Route)>;

/// Single owner of the current route.
///
/// Views get navigation through `navigate`; subscribers are told about each
/// actual change with the old and new route.
pub struct PageStore {
    current: Route,
    listeners: Vec<Listener>,
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new(Some(Page::Home))
    }
}

impl PageStore {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Route, Route) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns whether the route changed. Re-navigating to the current route
    /// is a no-op.
    pub fn navigate(&mut self, next: Route) -> bool {
        if next == self.current {
            return false;
        }
        let prev = self.current;
        self.current = next;
        for listener in &mut self.listeners {
            listener(prev, next);
        }
        true
    }

    pub fn navigate_id(&mut self, id: &str) -> bool {
        self.navigate(route_for_id(id))
    }
}
