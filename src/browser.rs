//! Browser host: mounts the planner into the page and wires DOM events to
//! widget actions.
//!
//! Listener closures are owned by [`EventListener`] values that detach on
//! drop. The mounted planner lives in a thread local, so mounting again
//! replaces the previous instance and removes its listeners.

use std::{cell::RefCell, rc::Rc, str::FromStr};

use mealweek_shared::{Day, FilterMode};
use mealweek_storage::LocalStorage;
use mealweek_web_planner::{Action, Effect, Prompt, Widget, WidgetSettings};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    StorageEvent, Window,
};

use crate::{AppError, Config};

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

struct Mounted {
    _planner: Rc<Planner>,
    _listeners: Vec<EventListener>,
}

struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    fn new(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

struct BrowserPrompt(Window);

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.0.confirm_with_message(message).unwrap_or(false)
    }
}

struct Planner {
    widget: RefCell<Widget<LocalStorage>>,
    settings: WidgetSettings,
    document: Document,
}

impl Planner {
    fn run(&self, action: Action) {
        let result = self.widget.borrow_mut().dispatch(action);

        match result {
            Ok(effects) => self.apply(effects),
            Err(err) => tracing::error!(err = %err, "action failed"),
        }
    }

    fn on_storage(&self, event: Event) {
        let Ok(event) = event.dyn_into::<StorageEvent>() else {
            return;
        };

        let result = self
            .widget
            .borrow()
            .on_storage_change(event.key().as_deref());

        match result {
            Ok(effects) => self.apply(effects),
            Err(err) => tracing::error!(err = %err, "failed to follow storage change"),
        }
    }

    fn on_click(&self, event: Event) {
        let Some(button) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-action]").ok().flatten())
        else {
            return;
        };

        let recipe_id = button.get_attribute("data-recipe");
        let action = match (button.get_attribute("data-action").as_deref(), recipe_id) {
            (Some("add"), Some(recipe_id)) => {
                let day = self
                    .document
                    .get_element_by_id(&format!("day-{recipe_id}"))
                    .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                    .and_then(|select| Day::from_str(&select.value()).ok());

                Action::Assign { recipe_id, day }
            }
            (Some("favorite"), Some(recipe_id)) => Action::ToggleFavorite(recipe_id),
            (Some("unfavorite"), Some(recipe_id)) => Action::RemoveFavorite(recipe_id),
            (Some("clear"), _) => {
                let Some(day) = button
                    .get_attribute("data-day")
                    .and_then(|d| Day::from_str(&d).ok())
                else {
                    return;
                };

                Action::ClearDay(day)
            }
            _ => return,
        };

        self.run(action);
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Replace { region, html } => {
                    match self.document.get_element_by_id(region.element_id(&self.settings)) {
                        Some(el) => el.set_inner_html(&html),
                        None => tracing::warn!(?region, "region element missing"),
                    }
                }
                Effect::FocusDaySelector { recipe_id } => {
                    if let Some(el) = self
                        .document
                        .get_element_by_id(&format!("day-{recipe_id}"))
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        let _ = el.focus();
                    }
                }
                Effect::ResetDaySelector { recipe_id } => {
                    if let Some(select) = self
                        .document
                        .get_element_by_id(&format!("day-{recipe_id}"))
                        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                    {
                        select.set_value("");
                    }
                }
            }
        }
    }
}

fn element(document: &Document, id: &str) -> Result<Element, AppError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_owned()))
}

/// Mounts the planner.
///
/// With `root_id`, the full planner markup is written into that element.
/// Without it the page must already contain the controls and regions named
/// by the configuration, which are then filled in using whatever the controls
/// currently hold.
#[wasm_bindgen(js_name = mountPlanner)]
pub fn mount_planner(
    root_id: Option<String>,
    config_toml: Option<String>,
) -> Result<(), JsValue> {
    mount(root_id.as_deref(), config_toml.as_deref())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn mount(root_id: Option<&str>, config_toml: Option<&str>) -> Result<(), AppError> {
    let config = Config::load(config_toml)?;

    if let Err(err) =
        crate::observability::init_observability(env!("CARGO_PKG_VERSION"), &config.logging.level)
    {
        // already installed by an earlier mount
        tracing::debug!(err = %err, "observability not reinitialized");
    }

    let window = web_sys::window().ok_or(AppError::Browser("window"))?;
    let document = window.document().ok_or(AppError::Browser("document"))?;
    let store = LocalStorage::open()?;
    let widget = crate::build_widget(&config, store, BrowserPrompt(window.clone()))?;
    let settings = widget.settings().clone();

    let planner = Rc::new(Planner {
        widget: RefCell::new(widget),
        settings: settings.clone(),
        document: document.clone(),
    });

    match root_id {
        Some(root_id) => {
            let shell = planner.widget.borrow().render_shell()?;
            element(&document, root_id)?.set_inner_html(&shell);
        }
        None => {
            let search_term = element(&document, &settings.ids.search)?
                .dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let filter_mode = element(&document, &settings.ids.filter)?
                .dyn_into::<HtmlSelectElement>()
                .map(|select| FilterMode::from_value(&select.value()))
                .unwrap_or_default();
            planner
                .widget
                .borrow_mut()
                .restore_controls(&search_term, filter_mode);

            let effects = planner.widget.borrow().render_all()?;
            planner.apply(effects);
        }
    }

    attach(planner, &window, &document, &settings)
}

fn attach(
    planner: Rc<Planner>,
    window: &Window,
    document: &Document,
    settings: &WidgetSettings,
) -> Result<(), AppError> {
    let search = element(document, &settings.ids.search)?;
    let filter = element(document, &settings.ids.filter)?;
    let reset = element(document, &settings.ids.reset)?;
    let list = element(document, &settings.ids.list)?;
    let plan = element(document, &settings.ids.plan)?;
    let favorites = element(document, &settings.ids.favorites)?;

    let mut listeners = vec![];

    let p = planner.clone();
    listeners.push(EventListener::new(&search, "input", move |event| {
        if let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            p.run(Action::Search(input.value()));
        }
    }));

    let p = planner.clone();
    listeners.push(EventListener::new(&filter, "change", move |event| {
        if let Some(select) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        {
            p.run(Action::Filter(FilterMode::from_value(&select.value())));
        }
    }));

    let p = planner.clone();
    listeners.push(EventListener::new(&reset, "click", move |_| {
        p.run(Action::Reset);
    }));

    for region in [list, plan, favorites] {
        let p = planner.clone();
        listeners.push(EventListener::new(&region, "click", move |event| p.on_click(event)));
    }

    let p = planner.clone();
    listeners.push(EventListener::new(window, "storage", move |event| p.on_storage(event)));

    tracing::info!(listeners = listeners.len(), "planner mounted");

    MOUNTED.with(|mounted| {
        mounted.replace(Some(Mounted {
            _planner: planner,
            _listeners: listeners,
        }));
    });

    Ok(())
}
