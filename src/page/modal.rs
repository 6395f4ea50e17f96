// Project detail modal. The copy for each project lives in a static table
// keyed by the trigger's `data-project` value.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, KeyboardEvent};

use super::dom;

const MODAL_ID: &str = "project-modal";
const TITLE_ID: &str = "modal-title";
const DESCRIPTION_ID: &str = "modal-description";
const HIGHLIGHTS_ID: &str = "modal-highlights";
const DEMO_ID: &str = "modal-demo";
const REPO_ID: &str = "modal-repo";

const TRIGGER_SELECTOR: &str = ".project-detail";
const CLOSE_SELECTOR: &str = "[data-close=\"modal\"], .modal-backdrop";
const ACTIVE_CLASS: &str = "active";
pub const CLOSE_KEY: &str = "Escape";

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 3],
    pub demo: &'static str,
    pub repo: &'static str,
}

impl Project {
    pub fn demo_link(&self) -> Option<&'static str> {
        Some(self.demo).filter(|url| !url.is_empty())
    }

    pub fn repo_link(&self) -> Option<&'static str> {
        Some(self.repo).filter(|url| !url.is_empty())
    }
}

pub const PROJECTS: [(&str, Project); 6] = [
    (
        "rainfall",
        Project {
            title: "Rainfall Prediction System",
            description: "A predictive analytics pipeline that forecasts rainfall by training machine learning models on historical climatic datasets to support proactive agricultural decision-making.",
            highlights: [
                "Implemented data preprocessing workflows with Pandas & NumPy",
                "Optimised Random Forest & XGBoost models for improved accuracy",
                "Visualised feature importance to highlight climatic influence",
            ],
            demo: "",
            repo: "",
        },
    ),
    (
        "chatbot",
        Project {
            title: "ChatBot AI",
            description: "An intelligent virtual assistant designed to automate customer support, delivering context-aware responses and reducing manual intervention.",
            highlights: [
                "Architected intent classification using TensorFlow & Keras",
                "Integrated contextual memory for multi-turn conversations",
                "Deployed monitoring dashboard to analyse user satisfaction",
            ],
            demo: "",
            repo: "",
        },
    ),
    (
        "mediaware",
        Project {
            title: "MediAware",
            description: "An AI-driven public health chatbot that educates users about diseases through conversational interfaces and curated medical insights.",
            highlights: [
                "Crafted responsive frontend with HTML, CSS, and JavaScript",
                "Developed Flask backend to orchestrate AI assistant responses",
                "Embedded analytics to reveal usage patterns and FAQs",
            ],
            demo: "",
            repo: "",
        },
    ),
    (
        "fitnesspal",
        Project {
            title: "FitnessPal",
            description: "A React Native workout companion that builds personalised routines based on user goals, habits, and progress tracking metrics.",
            highlights: [
                "Designed adaptive workout generator for multiple fitness levels",
                "Implemented offline-first architecture for seamless usage",
                "Introduced social challenges to sustain user motivation",
            ],
            demo: "",
            repo: "",
        },
    ),
    (
        "bookclub",
        Project {
            title: "BookClub",
            description: "A community-driven platform enabling readers to discover, review, and discuss books through curated clubs and thematic collections.",
            highlights: [
                "Built scalable backend using Django & PostgreSQL",
                "Implemented recommendation engine powered by user preferences",
                "Secured role-based moderation for club leaders",
            ],
            demo: "",
            repo: "",
        },
    ),
    (
        "weathernow",
        Project {
            title: "WeatherNow",
            description: "A real-time weather dashboard that aggregates multi-source APIs to present forecasts, alerts, and interactive data visualisations.",
            highlights: [
                "Integrates RESTful weather services with graceful error handling",
                "Features modular UI components for insights and trends",
                "Implements offline caching strategies for last-known forecasts",
            ],
            demo: "",
            repo: "",
        },
    ),
];

pub fn project(key: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|(k, _)| *k == key).map(|(_, project)| project)
}

pub fn closes_on_key(key: &str, open: bool) -> bool {
    open && key == CLOSE_KEY
}

struct Modal {
    document: Document,
    root: Element,
    title: Option<Element>,
    description: Option<Element>,
    highlights: Option<Element>,
    demo: Option<Element>,
    repo: Option<Element>,
}

fn set_link(link: &Option<Element>, url: Option<&str>) {
    let link = match link {
        Some(link) => link,
        None => return,
    };
    if let (Some(anchor), Some(url)) = (link.dyn_ref::<HtmlAnchorElement>(), url) {
        anchor.set_href(url);
    }
    if let Some(el) = link.dyn_ref::<HtmlElement>() {
        el.set_hidden(url.is_none());
    }
}

impl Modal {
    fn is_open(&self) -> bool {
        self.root.class_list().contains(ACTIVE_CLASS)
    }

    fn set_body_overflow(&self, value: &str) -> Result<(), JsValue> {
        match self.document.body() {
            Some(body) => body.style().set_property("overflow", value),
            None => Ok(()),
        }
    }

    fn open(&self, project: &Project) -> Result<(), JsValue> {
        if let Some(title) = &self.title {
            title.set_text_content(Some(project.title));
        }
        if let Some(description) = &self.description {
            description.set_text_content(Some(project.description));
        }
        if let Some(list) = &self.highlights {
            list.set_inner_html("");
            for point in &project.highlights {
                let item = self.document.create_element("li")?;
                item.set_text_content(Some(point));
                list.append_child(&item)?;
            }
        }
        set_link(&self.demo, project.demo_link());
        set_link(&self.repo, project.repo_link());

        self.root.class_list().add_1(ACTIVE_CLASS)?;
        self.root.set_attribute("aria-hidden", "false")?;
        self.set_body_overflow("hidden")
    }

    fn close(&self) -> Result<(), JsValue> {
        self.root.class_list().remove_1(ACTIVE_CLASS)?;
        self.root.set_attribute("aria-hidden", "true")?;
        self.set_body_overflow("")
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let root = match document.get_element_by_id(MODAL_ID) {
        Some(root) => root,
        None => return Ok(()),
    };
    let modal = Rc::new(Modal {
        document: document.clone(),
        title: document.get_element_by_id(TITLE_ID),
        description: document.get_element_by_id(DESCRIPTION_ID),
        highlights: document.get_element_by_id(HIGHLIGHTS_ID),
        demo: document.get_element_by_id(DEMO_ID),
        repo: document.get_element_by_id(REPO_ID),
        root: root.clone(),
    });

    {
        let modal = modal.clone();
        dom::listen(&root, "click", move |event| {
            let hit = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map_or(false, |target| target.matches(CLOSE_SELECTOR).unwrap_or(false));
            if hit {
                if let Err(e) = modal.close() {
                    log!("closing project modal failed: {:?}", e);
                }
            }
        })?;
    }

    {
        let modal = modal.clone();
        dom::listen(document, "keydown", move |event| {
            let key = match event.dyn_ref::<KeyboardEvent>() {
                Some(event) => event.key(),
                None => return,
            };
            if closes_on_key(&key, modal.is_open()) {
                if let Err(e) = modal.close() {
                    log!("closing project modal failed: {:?}", e);
                }
            }
        })?;
    }

    for trigger in dom::collect(&document.query_selector_all(TRIGGER_SELECTOR)?) {
        let modal = modal.clone();
        let key = trigger.get_attribute("data-project");
        dom::listen(&trigger, "click", move |_| {
            let details = match key.as_deref().and_then(|key| project(key)) {
                Some(details) => details,
                None => return,
            };
            if let Err(e) = modal.open(details) {
                log!("opening project modal failed: {:?}", e);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_project_by_key() {
        for key in &["rainfall", "chatbot", "mediaware", "fitnesspal", "bookclub", "weathernow"] {
            assert!(project(key).is_some(), "missing {}", key);
        }
        assert_eq!(project("chatbot").map(|p| p.title), Some("ChatBot AI"));
        assert_eq!(project("weathernow").map(|p| p.highlights.len()), Some(3));
    }

    #[test]
    fn unknown_keys_open_nothing() {
        assert_eq!(project(""), None);
        assert_eq!(project("Rainfall"), None);
        assert_eq!(project("portfolio"), None);
    }

    #[test]
    fn keys_are_unique() {
        for (i, (key, _)) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[i + 1..].iter().all(|(other, _)| other != key));
        }
    }

    #[test]
    fn empty_links_are_hidden() {
        let bookclub = project("bookclub").unwrap();
        assert_eq!(bookclub.demo_link(), None);
        assert_eq!(bookclub.repo_link(), None);

        let linked = Project {
            demo: "https://example.com/demo",
            repo: "",
            ..PROJECTS[0].1
        };
        assert_eq!(linked.demo_link(), Some("https://example.com/demo"));
        assert_eq!(linked.repo_link(), None);
    }

    #[test]
    fn escape_closes_only_an_open_modal() {
        assert!(closes_on_key("Escape", true));
        assert!(!closes_on_key("Escape", false));
        assert!(!closes_on_key("Enter", true));
        assert!(!closes_on_key("Esc", true));
    }
}
