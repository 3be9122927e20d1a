#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::web;
use scraper::{ElementRef, Html, Selector};

use cake_order::metrics::Metrics;
use cake_order::store::InMemoryOrderStore;
use cake_order::web::AppState;

pub fn app_state(store: Arc<InMemoryOrderStore>) -> web::Data<AppState> {
    web::Data::new(AppState::new(store, Arc::new(Metrics::new().unwrap())))
}

/// Text content of the first element matching `selector`.
pub fn text_of(html: &str, selector: &str) -> String {
    let document = Html::parse_document(html);
    select_one(&document, selector).text().collect()
}

/// Start a real server on an ephemeral port, backed by a fresh store.
pub fn spawn_server() -> (String, Arc<InMemoryOrderStore>) {
    let store = Arc::new(InMemoryOrderStore::new());
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = cake_order::web::run(listener, app_state(store.clone())).unwrap();
    actix_web::rt::spawn(server);

    (format!("http://127.0.0.1:{port}"), store)
}

// ============================================================================
// Minimal form-filling browser
// ============================================================================
//
// Enough of a browser to drive the order page: load a page, type into text
// inputs, toggle radios/checkboxes and submit the form owning a button.
// Redirects are followed like a browser would.
//
// ============================================================================

pub struct Browser {
    base_url: String,
    client: reqwest::Client,
    page: String,
    typed: HashMap<String, String>,
    toggled: HashMap<String, bool>,
}

impl Browser {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            page: String::new(),
            typed: HashMap::new(),
            toggled: HashMap::new(),
        }
    }

    pub async fn url(&mut self, path: &str) {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success(), "GET {path} returned {}", response.status());
        self.load(response.text().await.unwrap());
    }

    pub fn get_text(&self, selector: &str) -> String {
        text_of(&self.page, selector)
    }

    pub fn set_value(&mut self, selector: &str, value: &str) {
        let id = self.element_id(selector);
        self.typed.insert(id, value.to_string());
    }

    /// Click a radio, checkbox or submit button.
    pub async fn click(&mut self, selector: &str) {
        let document = Html::parse_document(&self.page);
        let element = select_one(&document, selector);
        let input_type = element.value().attr("type").unwrap_or_default();
        let id = element.value().attr("id").unwrap_or_default().to_string();

        match (element.value().name(), input_type) {
            ("input", "checkbox") => {
                let checked = self.is_checked(&element);
                self.toggled.insert(id, !checked);
            }
            ("input", "radio") => {
                let group = element.value().attr("name").unwrap_or_default();
                let others: Vec<String> = document
                    .select(&Selector::parse("input[type=radio]").unwrap())
                    .filter(|radio| radio.value().attr("name") == Some(group))
                    .filter_map(|radio| radio.value().attr("id").map(str::to_string))
                    .collect();
                for other in others {
                    self.toggled.insert(other, false);
                }
                self.toggled.insert(id, true);
            }
            (_, "submit") => {
                let (action, fields) = self.owning_form(&document, &id);
                self.submit(&action, &fields).await;
            }
            (tag, kind) => panic!("don't know how to click <{tag} type={kind:?}>"),
        }
    }

    fn load(&mut self, page: String) {
        self.page = page;
        self.typed.clear();
        self.toggled.clear();
    }

    fn element_id(&self, selector: &str) -> String {
        let document = Html::parse_document(&self.page);
        select_one(&document, selector)
            .value()
            .attr("id")
            .unwrap_or_else(|| panic!("{selector} has no id"))
            .to_string()
    }

    fn is_checked(&self, element: &ElementRef<'_>) -> bool {
        let id = element.value().attr("id").unwrap_or_default();
        self.toggled
            .get(id)
            .copied()
            .unwrap_or_else(|| element.value().attr("checked").is_some())
    }

    /// Action and successful controls of the form containing `button_id`.
    fn owning_form(&self, document: &Html, button_id: &str) -> (String, Vec<(String, String)>) {
        let button = Selector::parse(&format!("#{button_id}")).unwrap();
        let inputs = Selector::parse("input").unwrap();

        let form = document
            .select(&Selector::parse("form").unwrap())
            .find(|form| form.select(&button).next().is_some())
            .unwrap_or_else(|| panic!("#{button_id} is not inside a form"));

        let mut fields = Vec::new();
        for input in form.select(&inputs) {
            let Some(name) = input.value().attr("name") else { continue };
            let id = input.value().attr("id").unwrap_or_default().to_string();
            let value = input.value().attr("value").unwrap_or_default();

            match input.value().attr("type").unwrap_or("text") {
                "checkbox" | "radio" => {
                    if self.is_checked(&input) {
                        fields.push((name.to_string(), value.to_string()));
                    }
                }
                _ => {
                    let typed = self.typed.get(&id).map(String::as_str).unwrap_or(value);
                    fields.push((name.to_string(), typed.to_string()));
                }
            }
        }

        let action = form.value().attr("action").unwrap_or("/").to_string();
        (action, fields)
    }

    async fn submit(&mut self, action: &str, fields: &[(String, String)]) {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, action))
            .form(fields)
            .send()
            .await
            .unwrap();
        let page = response.text().await.unwrap();
        self.load(page);
    }
}

fn select_one<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
    document
        .select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("no element matches {selector:?}"))
}
