//! Client-side router: renders the nav plus the page for the current path,
//! intercepts in-site links and follows browser history.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::alphabet;
use crate::config::SiteConfig;
use crate::dom::{self, Listener};
use crate::error::{Result, SiteError};
use crate::hockey;
use crate::pages;
use crate::routes::Route;

struct App {
    root: Element,
    config: Rc<SiteConfig>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

fn current() -> Option<(Element, Rc<SiteConfig>)> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| (app.root.clone(), app.config.clone())))
}

/// Mount the site into `config.root_id` and route to the current location.
pub fn start(config: SiteConfig) -> Result<()> {
    let doc = dom::document()?;
    let root = dom::ensure_root(&doc, &config.root_id)?;
    let config = Rc::new(config);
    APP.with(|cell| {
        cell.replace(Some(App { root: root.clone(), config: config.clone() }));
    });

    let clicks = Listener::new(&doc, "click", |evt| {
        let Some(path) = route_link(&evt) else { return };
        evt.prevent_default();
        if let Err(e) = push_and_show(&path) {
            warn!("navigation to {path} failed: {e}");
        }
    })?;
    let win = dom::win()?;
    let history = Listener::new(&win, "popstate", |_| {
        if let Err(e) = show_location() {
            warn!("popstate render failed: {e}");
        }
    })?;
    LISTENERS.with(|cell| {
        *cell.borrow_mut() = vec![clicks, history];
    });

    show_location()?;
    info!("site started");
    Ok(())
}

/// Path of an in-site link the click should be handled by the router.
fn route_link(evt: &web_sys::Event) -> Option<String> {
    if let Some(mouse) = evt.dyn_ref::<MouseEvent>() {
        if mouse.button() != 0 || mouse.ctrl_key() || mouse.meta_key() || mouse.shift_key() || mouse.alt_key() {
            return None;
        }
    }
    let target: Element = evt.target()?.dyn_into().ok()?;
    let link = target.closest("a[data-route]").ok()??;
    link.get_attribute("data-route")
}

fn push_and_show(path: &str) -> Result<()> {
    let win = dom::win()?;
    win.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))?;
    show(path)
}

fn show_location() -> Result<()> {
    let path = dom::win()?.location().pathname()?;
    show(&path)
}

/// Render whatever lives at `path`. Unknown paths get the not-found page.
pub fn show(path: &str) -> Result<()> {
    let (root, config) = current().ok_or(SiteError::MissingElement("app"))?;
    match Route::parse(path) {
        Ok(route) => mount_route(&root, route, &config),
        Err(SiteError::UnknownRoute(p)) => {
            warn!("no route for {p}");
            let main = reset_layout(&root)?;
            main.set_inner_html(&pages::render_not_found(&p));
            dom::document()?.set_title("Not found");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Tear down any live game, then render `route` under the nav.
pub fn mount_route(root: &Element, route: Route, config: &SiteConfig) -> Result<()> {
    let main = reset_layout(root)?;
    match route {
        Route::Alphabet => alphabet::view::mount(&main, &config.alphabet_voice)?,
        Route::Hockey => hockey::view::mount(&main, &config.hockey, &config.hockey_voice)?,
        other => {
            if let Some(html) = pages::render_page(other) {
                main.set_inner_html(&html);
            }
        }
    }
    dom::document()?.set_title(route.title());
    if let Ok(win) = dom::win() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
    info!(path = route.path(), "route mounted");
    Ok(())
}

fn reset_layout(root: &Element) -> Result<Element> {
    alphabet::view::unmount();
    hockey::view::unmount();
    root.set_inner_html(&format!(r#"{}<main id="page"></main>"#, pages::render_nav()));
    root.query_selector("#page")?.ok_or(SiteError::MissingElement("page"))
}
