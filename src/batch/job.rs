use rayon::prelude::*;

use crate::{
    edit::params::EditParams,
    engine::apply_to_target,
    foundation::{
        error::{MaskfxError, MaskfxResult},
        raster::ImageRgb8,
    },
    mask::component::{Component, ComponentId},
    segment::capability::PointPrompt,
};

/// A reusable edit definition: the point prompts that select the region and
/// the photometric adjustments to apply to it.
///
/// The `target` names the saved component the edits act on; `None` relies on
/// the empty-component full-image fallback.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EditTemplate {
    /// Display name of the template.
    pub name: String,
    /// Normalized point prompts that defined the region upstream.
    #[serde(default)]
    pub points: Vec<PointPrompt>,
    /// Component the edits apply to.
    #[serde(default)]
    pub target: Option<ComponentId>,
    /// The photometric adjustments.
    pub edits: EditParams,
}

/// One unit of batch work: an image plus its saved components.
#[derive(Clone, Debug)]
pub struct BatchItem {
    /// Identifier carried through to the outcome (typically a filename).
    pub name: String,
    /// The source image.
    pub image: ImageRgb8,
    /// Components saved for this image (may be empty).
    pub components: Vec<Component>,
}

/// Per-item result of a batch run. A failed item never aborts the batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The item's `name`.
    pub name: String,
    /// The edited variant, or the first error hit for this item.
    pub result: MaskfxResult<ImageRgb8>,
}

/// Threading options for [`apply_batch`].
#[derive(Clone, Debug)]
pub struct BatchThreading {
    /// Run items on a rayon pool (items are independent; ordering between
    /// them carries no correctness requirement).
    pub parallel: bool,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for BatchThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Apply every template, in order, to every item.
///
/// Templates within one item are sequential: each template edits the output
/// of the previous one. Items are an embarrassingly parallel map; each
/// item's first error is captured in its [`BatchOutcome`] and the remaining
/// items continue. Outcomes keep the input item order.
#[tracing::instrument(skip(items, templates), fields(items = items.len(), templates = templates.len()))]
pub fn apply_batch(
    items: &[BatchItem],
    templates: &[EditTemplate],
    threading: &BatchThreading,
) -> MaskfxResult<Vec<BatchOutcome>> {
    if !threading.parallel {
        return Ok(items.iter().map(|it| run_item(it, templates)).collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    Ok(pool.install(|| {
        items
            .par_iter()
            .map(|it| run_item(it, templates))
            .collect()
    }))
}

fn run_item(item: &BatchItem, templates: &[EditTemplate]) -> BatchOutcome {
    let mut out = item.image.clone();
    for template in templates {
        match apply_to_target(&out, &item.components, template.target, &template.edits) {
            Ok(next) => out = next,
            Err(e) => {
                tracing::debug!(item = %item.name, template = %template.name, error = %e, "batch item failed");
                return BatchOutcome {
                    name: item.name.clone(),
                    result: Err(e),
                };
            }
        }
    }
    BatchOutcome {
        name: item.name.clone(),
        result: Ok(out),
    }
}

fn build_thread_pool(threads: Option<usize>) -> MaskfxResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        if n == 0 {
            return Err(MaskfxError::validation("threads must be > 0 when set"));
        }
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MaskfxError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/job.rs"]
mod tests;
