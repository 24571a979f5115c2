/// Page model - the like controls found on a rendered reflections page
///
/// Mirrors the slice of the page markup the like handler depends on:
/// controls marked `toggle-like-button`, their `data-reflection-id`, the nested
/// `like-count` display and the two mutually exclusive style classes.
use crate::constants::{
    LIKED_CLASS, LIKE_COUNT_CLASS, REFLECTION_ID_ATTR, TOGGLE_CONTROL_CLASS, UNLIKED_CLASS,
};
use crate::models::ReflectionId;
use select::document::Document;
use select::node::Node;
use select::predicate::Class;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifies one control within one constructed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlKey {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LikeControl {
    pub key: ControlKey,
    pub reflection_id: ReflectionId,
    pub label: String,
    classes: BTreeSet<String>,
    count_text: String,
}

impl LikeControl {
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    pub fn set_count_text(&mut self, text: impl Into<String>) {
        self.count_text = text.into();
    }

    pub fn is_liked(&self) -> bool {
        self.has_class(LIKED_CLASS)
    }

    /// Apply exactly one of the liked/unliked styles
    pub fn apply_liked_style(&mut self, liked: bool) {
        let (add, remove) = if liked {
            (LIKED_CLASS, UNLIKED_CLASS)
        } else {
            (UNLIKED_CLASS, LIKED_CLASS)
        };
        self.classes.remove(remove);
        self.classes.insert(add.to_string());
    }
}

/// Controls of one page, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    generation: u64,
    controls: Vec<LikeControl>,
}

/// Description of a control for pages built without markup
#[derive(Debug, Clone)]
pub struct ControlSpec {
    pub reflection_id: ReflectionId,
    pub label: String,
    pub likes: u64,
    pub liked: bool,
}

impl PageView {
    /// Collect every like control from rendered HTML
    ///
    /// Controls without an identifier or without a count display are skipped:
    /// the handler could neither address the endpoint nor show the result.
    pub fn parse(html: &str) -> Self {
        let generation = next_generation();
        let document = Document::from(html);
        let mut controls = Vec::new();

        for node in document.find(Class(TOGGLE_CONTROL_CLASS)) {
            let Some(reflection_id) = node.attr(REFLECTION_ID_ATTR).and_then(ReflectionId::parse)
            else {
                log::warn!(
                    "[Page] Skipping like control without {} attribute",
                    REFLECTION_ID_ATTR
                );
                continue;
            };

            let Some(count_node) = node.find(Class(LIKE_COUNT_CLASS)).next() else {
                log::warn!(
                    "[Page] Skipping like control for reflection {}: no .{} element",
                    reflection_id,
                    LIKE_COUNT_CLASS
                );
                continue;
            };

            let classes = node
                .attr("class")
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect();

            let mut label = String::new();
            collect_label(&node, &mut label);

            controls.push(LikeControl {
                key: ControlKey {
                    generation,
                    index: controls.len(),
                },
                reflection_id,
                label: collapse_whitespace(&label),
                classes,
                count_text: count_node.text().trim().to_string(),
            });
        }

        log::info!("[Page] Found {} like control(s)", controls.len());
        Self {
            generation,
            controls,
        }
    }

    pub fn from_controls(specs: impl IntoIterator<Item = ControlSpec>) -> Self {
        let generation = next_generation();
        let controls = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let mut control = LikeControl {
                    key: ControlKey { generation, index },
                    reflection_id: spec.reflection_id,
                    label: spec.label,
                    classes: [TOGGLE_CONTROL_CLASS.to_string()].into_iter().collect(),
                    count_text: spec.likes.to_string(),
                };
                control.apply_liked_style(spec.liked);
                control
            })
            .collect();

        Self {
            generation,
            controls,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn controls(&self) -> &[LikeControl] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Look up a control; keys from another page generation never match
    pub fn control(&self, key: ControlKey) -> Option<&LikeControl> {
        if key.generation != self.generation {
            return None;
        }
        self.controls.get(key.index)
    }

    pub fn control_mut(&mut self, key: ControlKey) -> Option<&mut LikeControl> {
        if key.generation != self.generation {
            return None;
        }
        self.controls.get_mut(key.index)
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::from_controls(Vec::new())
    }
}

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Text of the control, leaving out the count display
fn collect_label(node: &Node, out: &mut String) {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            out.push_str(text);
            out.push(' ');
        } else if !child.is(Class(LIKE_COUNT_CLASS)) {
            collect_label(&child, out);
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
