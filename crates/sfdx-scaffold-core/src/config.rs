//! Rendering of the two JSON configs every project receives.
//!
//! Both start from an embedded asset that is parsed into a [`serde_json::Value`],
//! mutated field by field, and serialized again. Values are never spliced into
//! JSON text, so a namespace or URL containing quotes or backslashes still
//! produces a valid document.
//!
//! - `sfdx-project.json` uses the standard two-space pretty printer.
//! - `config/project-scratch-def.json` uses [`InlineArrayFormatter`], which keeps
//!   arrays on one line (`"features": ["A", "B"]`).

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Value};

use crate::error::{Result, ScaffoldError};
use crate::plan::{GenerationPlan, SubstitutionContext};
use crate::templates::embedded;

pub const SFDX_PROJECT_FILE: &str = "sfdx-project.json";
pub const SCRATCH_DEF_FILE: &str = "config/project-scratch-def.json";

/// Render `sfdx-project.json` for the given substitutions.
pub fn render_sfdx_project(ctx: &SubstitutionContext) -> Result<String> {
    let mut project = parse_asset(embedded::SFDX_PROJECT_JSON, SFDX_PROJECT_FILE)?;
    let root = object_mut(&mut project, SFDX_PROJECT_FILE)?;

    if let Some(Value::Array(dirs)) = root.get_mut("packageDirectories") {
        if let Some(Value::Object(default_dir)) = dirs.first_mut() {
            default_dir.insert(
                "path".into(),
                Value::String(ctx.package_directory_path.clone()),
            );
        }
    }
    root.insert("name".into(), Value::String(ctx.project_name.clone()));
    root.insert("namespace".into(), Value::String(ctx.namespace.clone()));
    root.insert("sfdcLoginUrl".into(), Value::String(ctx.login_url.clone()));
    root.insert(
        "sourceApiVersion".into(),
        Value::String(ctx.api_version.clone()),
    );

    serialize(&project, PrettyFormatter::with_indent(b"  "), SFDX_PROJECT_FILE)
}

/// Render `config/project-scratch-def.json` with the template's feature list.
pub fn render_scratch_def(plan: &GenerationPlan) -> Result<String> {
    let mut def = parse_asset(embedded::SCRATCH_DEF_JSON, SCRATCH_DEF_FILE)?;
    let root = object_mut(&mut def, SCRATCH_DEF_FILE)?;

    root.insert(
        "orgName".into(),
        Value::String(plan.project_name.to_string()),
    );
    let features = plan.descriptor.scratch_features;
    if features.is_empty() {
        root.shift_remove("features");
    } else {
        root.insert(
            "features".into(),
            features.iter().map(|f| Value::String((*f).into())).collect(),
        );
    }

    serialize(&def, InlineArrayFormatter::new(), SCRATCH_DEF_FILE)
}

fn parse_asset(asset: &str, file: &str) -> Result<Value> {
    serde_json::from_str(asset).map_err(|e| ScaffoldError::Json {
        path: file.into(),
        source: e,
    })
}

fn object_mut<'a>(value: &'a mut Value, file: &str) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| ScaffoldError::Json {
        path: file.into(),
        source: serde::de::Error::custom("expected a JSON object at the top level"),
    })
}

fn serialize<F: Formatter>(value: &Value, formatter: F, file: &str) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(|e| ScaffoldError::Json {
        path: Path::new(file).to_path_buf(),
        source: e,
    })?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty printer that indents objects by two spaces but writes arrays inline.
#[derive(Debug, Default)]
pub struct InlineArrayFormatter {
    current_indent: usize,
    has_value: bool,
}

impl InlineArrayFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for _ in 0..self.current_indent {
            writer.write_all(b"  ")?;
        }
        Ok(())
    }
}

impl Formatter for InlineArrayFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            self.indent(writer)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        self.indent(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{resolve, CreateOptions};

    fn plan(template: &str) -> GenerationPlan {
        let opts = CreateOptions {
            template: Some(template.into()),
            ..CreateOptions::new("demo")
        };
        resolve(&opts).unwrap()
    }

    #[test]
    fn test_sfdx_project_fields() {
        let opts = CreateOptions {
            default_package_dir: Some("empty".into()),
            namespace: Some("testnamespace".into()),
            ..CreateOptions::new("fooempty")
        };
        let out = render_sfdx_project(&resolve(&opts).unwrap().substitutions()).unwrap();
        assert!(out.contains("\"namespace\": \"testnamespace\","), "{out}");
        assert!(out.contains("\"path\": \"empty\","), "{out}");
        assert!(out.contains("\"sourceApiVersion\": \"58.0\""), "{out}");
        assert!(out.contains("\"name\": \"fooempty\","), "{out}");
    }

    #[test]
    fn test_sfdx_project_keeps_asset_key_order() {
        let out = render_sfdx_project(&plan("standard").substitutions()).unwrap();
        let dirs = out.find("packageDirectories").unwrap();
        let namespace = out.find("\"namespace\"").unwrap();
        let version = out.find("sourceApiVersion").unwrap();
        assert!(dirs < namespace && namespace < version);
        assert!(out.contains("\"namespace\": \"\","));
    }

    #[test]
    fn test_sfdx_project_escapes_values() {
        let mut ctx = plan("standard").substitutions();
        ctx.namespace = "we\"ird\\ns".into();
        let out = render_sfdx_project(&ctx).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["namespace"], "we\"ird\\ns");
    }

    #[test]
    fn test_scratch_def_analytics_features_inline() {
        let out = render_scratch_def(&plan("analytics")).unwrap();
        assert!(
            out.contains("\"features\": [\"AnalyticsAdminPerms\", \"EinsteinAnalyticsPlus\"]"),
            "{out}"
        );
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["orgName"], "demo");
        assert_eq!(parsed["settings"]["orgPreferenceSettings"]["s1DesktopEnabled"], true);
    }

    #[test]
    fn test_scratch_def_standard_has_no_features() {
        let out = render_scratch_def(&plan("standard")).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert!(parsed.get("features").is_none());
        assert_eq!(parsed["edition"], "Developer");
    }

    #[test]
    fn test_inline_formatter_layout() {
        let value = serde_json::json!({ "a": [1, 2], "b": { "c": [] }, "d": {} });
        let out = serialize(&value, InlineArrayFormatter::new(), "t.json").unwrap();
        assert_eq!(
            out,
            "{\n  \"a\": [1, 2],\n  \"b\": {\n    \"c\": []\n  },\n  \"d\": {}\n}\n"
        );
    }
}
