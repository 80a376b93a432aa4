//! Analytics event tracking.
//!
//! A typed event taxonomy and a fire-and-forget dispatcher. Dispatching never
//! returns an error and never panics: analytics must not affect page
//! functionality. In development every event goes to the diagnostic log; in
//! production events are forwarded to the configured external collector on a
//! background task, with failures logged and swallowed.

use crate::config::{AppEnv, Config};
use crate::metrics::DispatchMetrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Analytics event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Navigation,
    Interaction,
    Form,
    Media,
    Ecommerce,
    Performance,
    Error,
}

/// The closed set of event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    // Navigation events
    PageView,
    LinkClick,

    // Interaction events
    ButtonClick,
    Toggle,
    Copy,
    Scroll,
    Hover,

    // Form events
    FormStart,
    FormSubmit,
    FormError,
    FormFieldChange,

    // Media events
    VideoPlay,
    VideoPause,
    VideoComplete,
    AudioPlay,

    // Ecommerce events
    ProductView,
    AddToCart,
    CheckoutStart,
    Purchase,

    // Error events
    ClientError,
    ApiError,
}

impl EventCategory {
    /// Wire name of the category, as layered into event parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Navigation => "navigation",
            EventCategory::Interaction => "interaction",
            EventCategory::Form => "form",
            EventCategory::Media => "media",
            EventCategory::Ecommerce => "ecommerce",
            EventCategory::Performance => "performance",
            EventCategory::Error => "error",
        }
    }
}

impl EventName {
    /// The category an event name belongs to.
    pub fn category(&self) -> EventCategory {
        use EventName::*;
        match self {
            PageView | LinkClick => EventCategory::Navigation,
            ButtonClick | Toggle | Copy | Scroll | Hover => EventCategory::Interaction,
            FormStart | FormSubmit | FormError | FormFieldChange => EventCategory::Form,
            VideoPlay | VideoPause | VideoComplete | AudioPlay => EventCategory::Media,
            ProductView | AddToCart | CheckoutStart | Purchase => EventCategory::Ecommerce,
            ClientError | ApiError => EventCategory::Error,
        }
    }
}

/// A single event parameter value: string, number or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Free-form parameter mapping attached to an event.
pub type EventParams = BTreeMap<String, ParamValue>;

/// A named, parameterized, fire-and-forget signal describing a user
/// interaction. Created transiently at the call site and consumed
/// immediately by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: EventName,
    #[serde(default)]
    pub params: EventParams,
}

impl AnalyticsEvent {
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            params: EventParams::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

/// The event dispatcher.
///
/// Cheap to clone; shares the application's HTTP client.
#[derive(Clone)]
pub struct Dispatcher {
    env: AppEnv,
    collector_url: Option<String>,
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            env: config.app_env,
            collector_url: config.analytics_collector_url.clone(),
            client,
        }
    }

    /// Dispatch an event. Fire-and-forget: no return value, never throws.
    ///
    /// The event's category is layered into the parameters under the
    /// required `category` tag before it leaves the process.
    pub fn dispatch(&self, mut event: AnalyticsEvent) {
        DispatchMetrics::global().record_dispatch();

        event.params.insert(
            "category".to_string(),
            ParamValue::Str(event.name.category().as_str().to_string()),
        );

        match (self.env, &self.collector_url) {
            (AppEnv::Production, Some(url)) => {
                let client = self.client.clone();
                let url = url.clone();
                tokio::spawn(async move {
                    match client.post(&url).json(&event).send().await {
                        Ok(resp) if resp.status().is_success() => {
                            DispatchMetrics::global().record_forward();
                        }
                        Ok(resp) => {
                            DispatchMetrics::global().record_forward_failure();
                            warn!("Analytics collector returned {}", resp.status());
                        }
                        Err(e) => {
                            DispatchMetrics::global().record_forward_failure();
                            warn!("Analytics forward failed: {}", e);
                        }
                    }
                });
            }
            _ => {
                debug!("Analytics event: {:?} {:?}", event.name, event.params);
            }
        }
    }

    /// Track a page view.
    pub fn page_view(&self, url: &str) {
        self.dispatch(AnalyticsEvent::new(EventName::PageView).with_param("page", url));
    }

    /// Track a form-related event.
    pub fn form(&self, name: EventName, form_name: &str) {
        self.dispatch(AnalyticsEvent::new(name).with_param("form_name", form_name));
    }

    /// Track an application error.
    pub fn error(&self, name: EventName, message: &str) {
        self.dispatch(AnalyticsEvent::new(name).with_param("error_message", message));
    }
}
