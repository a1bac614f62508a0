//! Turns patch layouts into a `tikzpicture`. Output is line based: every
//! piece of TikZ is rendered from a small named template and split into
//! lines, then the per-patch blocks are stitched together in request order.
use std::fmt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tera::{Context, Tera};

use crate::errors::DocumentError;
use crate::lattice::canvas::CanvasPoint;
use crate::patch::{layout, DrawDirective, PatchSpec};

/// Global picture style.
pub mod options;

pub use options::TikzOptions;

/// Line templates for the whole picture. Values that carry their own braces
/// (coordinate lists, the scope shift) are passed in pre-braced.
pub fn templates() -> Result<Tera, DocumentError> {
    let mut tikz = Tera::default();
    tikz.autoescape_on(vec![]);
    tikz.add_raw_templates(vec![
        ("prelude", r"\begin{tikzpicture}[{{ options }}]"),
        ("epilog", r"\end{tikzpicture}"),
        ("args", r"% args: {{ args }}"),
        (
            "scope_open",
            concat!(
                r"% overall translation",
                "\n",
                r"\begin{scope}[shift = {{ shift }}]"
            ),
        ),
        ("scope_close", r"\end{scope}"),
        ("fill_heading", r"% fill grid squares with background colours"),
        (
            "fill",
            concat!(
                r"\foreach \x/\y in {{ coords }}{",
                "\n",
                r"    \filldraw[gridline, fill={{ colour }}] (\x, \y) rectangle +(2,2);",
                "\n",
                r"}"
            ),
        ),
        ("arc_heading", r"% draw/fill arcs"),
        (
            "arc",
            concat!(
                r"\foreach \x/\y in {{ coords }}{",
                "\n",
                r"    \filldraw[gridline, fill = {{ colour }}] (\x, \y) arc {{ arc }} -- cycle;",
                "\n",
                r"}"
            ),
        ),
    ])?;
    Ok(tikz)
}

fn render(tikz: &Tera, name: &str, context: &Context) -> Result<Vec<String>, DocumentError> {
    Ok(tikz
        .render(name, context)?
        .split('\n')
        .map(|s| s.to_string())
        .collect())
}

/// `{1/1, 3/3}`, the list a TikZ `\foreach \x/\y` walks.
pub fn foreach_list(coords: &[CanvasPoint]) -> String {
    let pairs: Vec<String> = coords.iter().map(|p| format!("{}/{}", p.x, p.y)).collect();
    format!("{{{}}}", pairs.join(", "))
}

fn quoted(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}

/// Parameter record written as a comment at the top of each patch block.
fn args_comment(spec: &PatchSpec) -> String {
    let (sx, sy) = spec.size();
    format!(
        "{{'o_x': {}, 'o_y': {}, 'd_x': {}, 'd_y': {}, 'nudge': {}, 'bl_col': {}, 'oth_col': {}, 'sz': ({}, {})}}",
        spec.origin.0,
        spec.origin.1,
        spec.distance.0,
        spec.distance.1,
        spec.nudge,
        quoted(&spec.bottom_left_colour),
        quoted(&spec.other_colour),
        sx,
        sy
    )
}

/// One `scope` block for a single patch, shifted to the patch origin.
pub fn patch_block(tikz: &Tera, spec: &PatchSpec) -> Result<Vec<String>, DocumentError> {
    let empty = Context::new();
    let mut lines = vec![];

    let mut context = Context::new();
    context.insert("args", &args_comment(spec));
    lines.extend(render(tikz, "args", &context)?);

    let mut context = Context::new();
    context.insert("shift", &format!("{{({}, {})}}", spec.origin.0, spec.origin.1));
    lines.extend(render(tikz, "scope_open", &context)?);

    lines.extend(render(tikz, "fill_heading", &empty)?);
    let mut arcs_started = false;
    for directive in layout(spec) {
        let mut context = Context::new();
        context.insert("coords", &foreach_list(directive.coords()));
        context.insert("colour", directive.colour());
        match &directive {
            DrawDirective::FillRegion { .. } => {
                lines.extend(render(tikz, "fill", &context)?);
            }
            DrawDirective::ArcFill { edge, .. } => {
                if !arcs_started {
                    lines.extend(render(tikz, "arc_heading", &empty)?);
                    arcs_started = true;
                }
                context.insert("arc", edge.arc());
                lines.extend(render(tikz, "arc", &context)?);
            }
        }
    }

    lines.extend(render(tikz, "scope_close", &empty)?);
    Ok(lines)
}

/// Build the whole picture. Patches are laid out in parallel but always
/// appear in the same order as `specs`.
pub fn assemble(options: &TikzOptions, specs: &[PatchSpec]) -> Result<TikzDocument, DocumentError> {
    let tikz = templates()?;
    tracing::debug!(patches = specs.len(), "assembling tikzpicture");

    let mut context = Context::new();
    context.insert("options", &options.to_tikz());
    let mut lines = render(&tikz, "prelude", &context)?;

    let blocks = specs
        .par_iter()
        .map(|spec| patch_block(&tikz, spec))
        .collect::<Result<Vec<Vec<String>>, DocumentError>>()?;
    for block in blocks {
        lines.extend(block);
    }

    lines.extend(render(&tikz, "epilog", &Context::new())?);
    Ok(TikzDocument { lines })
}

/// A finished picture, one TikZ statement or comment per line.
#[derive(Debug, Clone, PartialEq)]
pub struct TikzDocument {
    lines: Vec<String>,
}

impl TikzDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of patch scopes in the picture.
    pub fn scope_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.starts_with(r"\begin{scope}"))
            .count()
    }

    /// Writes via a temporary sibling file and a rename, so a reader never
    /// sees half a picture.
    pub fn to_file(&self, path: &Path) -> Result<(), DocumentError> {
        let mut tmp_path = path.as_os_str().to_owned();
        tmp_path.push(format!(".tmp-{}", rand::random::<u32>()));
        let tmp_path = PathBuf::from(tmp_path);
        let written = std::fs::write(&tmp_path, self.to_string())
            .and_then(|_| std::fs::rename(&tmp_path, path));
        if let Err(err) = written {
            // Nothing useful to do if the cleanup fails too.
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        tracing::info!(path = %path.display(), lines = self.lines.len(), "wrote tikzpicture");
        Ok(())
    }
}

impl fmt::Display for TikzDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Where the picture for `input` goes by default: same name, `.tikz`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("tikz")
}
