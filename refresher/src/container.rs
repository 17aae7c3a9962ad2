//! HTML feed container
//!
//! Holds the current post elements and writes the container markup out
//! after every replacement, either to stdout or to a file.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::FeedError;
use crate::ports::FeedContainer;
use crate::render::{render_html, PostElement};

/// Element id of the container in the emitted markup
pub const CONTAINER_ID: &str = "feed-container";

/// Where rendered markup is written
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }
}

pub struct HtmlContainer {
    children: Mutex<Vec<PostElement>>,
    target: OutputTarget,
}

impl HtmlContainer {
    pub fn new(target: OutputTarget) -> Self {
        Self {
            children: Mutex::new(Vec::new()),
            target,
        }
    }

    fn write_markup(&self, elements: &[PostElement]) -> Result<(), FeedError> {
        let markup = container_markup(elements);
        match &self.target {
            OutputTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(markup.as_bytes())?;
                out.flush()?;
            }
            OutputTarget::File(path) => std::fs::write(path, markup)?,
        }
        Ok(())
    }
}

impl FeedContainer for HtmlContainer {
    fn replace_children(&self, elements: Vec<PostElement>) -> Result<(), FeedError> {
        // A poisoned lock only means an earlier writer panicked; the Vec is still usable.
        let mut children = self.children.lock().unwrap_or_else(|e| e.into_inner());
        self.write_markup(&elements)?;
        *children = elements;
        Ok(())
    }

    fn children(&self) -> Vec<PostElement> {
        self.children
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Full container markup, wrapper div included
pub fn container_markup(elements: &[PostElement]) -> String {
    format!(
        "<div id=\"{}\">\n{}</div>\n",
        CONTAINER_ID,
        render_html(elements)
    )
}
