//! Document assembly

use std::fmt::Write;
use taskdoc_types::{ResourceDeclaration, Task};
use tracing::debug;

use crate::error::Result;

/// Repository users are told to add as a toolchain integration
pub const CATALOG_REPOSITORY: &str = "https://github.com/open-toolchain/tekton-catalog";

/// Base of the per-task `kubectl apply` URL
///
/// Every task is assumed to be published in the upstream catalog, whatever
/// file it was actually loaded from.
pub const UPSTREAM_CATALOG_BASE: &str = "https://raw.githubusercontent.com/tektoncd/catalog/master/";

/// Render the full document for `tasks` found under `folder`
pub fn assemble(folder: &str, tasks: &[Task]) -> Result<String> {
    let mut doc = String::new();
    write_document(&mut doc, folder, tasks)?;
    Ok(doc)
}

/// Render the full document into `out`
///
/// Any write failure aborts the whole document.
pub fn write_document<W: Write>(out: &mut W, folder: &str, tasks: &[Task]) -> Result<()> {
    debug!("Assembling document for {} task(s) in '{}'", tasks.len(), folder);

    writeln!(out, "# {folder} related tasks")?;
    write_summary(out, tasks)?;
    write_install_instructions(out, folder)?;

    for task in tasks {
        write_task(out, task)?;
    }

    Ok(())
}

// Anchors use the raw task name, not a slug of it.
fn write_summary<W: Write>(out: &mut W, tasks: &[Task]) -> Result<()> {
    for task in tasks {
        let name = task.name();
        writeln!(out, "-**[{name}](#{name})**: {}", task.description())?;
    }
    Ok(())
}

fn write_install_instructions<W: Write>(out: &mut W, folder: &str) -> Result<()> {
    writeln!(out, "## Install the Tasks")?;
    writeln!(
        out,
        "- Add a github integration in your toolchain to the repository containing the task ({CATALOG_REPOSITORY})"
    )?;
    writeln!(
        out,
        "- Add that github integration to the Definitions tab of your Continuous Delivery tekton pipeline, with the Path set to `{folder}`"
    )?;
    Ok(())
}

fn write_task<W: Write>(out: &mut W, task: &Task) -> Result<()> {
    let name = task.name();

    writeln!(out, "# {name}")?;
    writeln!(out, "## Install the Task")?;
    writeln!(out, "kubectl apply -f {UPSTREAM_CATALOG_BASE}{name}/{name}.yaml")?;
    writeln!(out, "### Input:-")?;

    if let Some(params) = task.params() {
        for param in params {
            writeln!(out, "- {}, {}", param.name, param.description)?;
        }
    }

    // Repeats the `### Input:-` label written above.
    if let Some(inputs) = task.inputs() {
        write_resource_line(out, "### Input:- ", inputs)?;
    }

    if let Some(outputs) = task.outputs() {
        write_resource_line(out, "### Output:- ", outputs)?;
    }

    Ok(())
}

fn write_resource_line<W: Write>(
    out: &mut W,
    label: &str,
    resources: &[ResourceDeclaration],
) -> Result<()> {
    out.write_str(label)?;
    for resource in resources {
        write!(out, "- {}, {}\t", resource.name, resource.resource_type)?;
    }
    out.write_char('\n')?;
    Ok(())
}
