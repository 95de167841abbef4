// src/detection/manifests.rs

//! Package-manifest analyzers.
//!
//! Each analyzer inspects one root-level manifest and records template
//! identifiers with their trigger reasons. All of them fail soft: an
//! unreadable or malformed manifest contributes nothing and is only logged.

use crate::core_types::DetectionResult;
use crate::templates::TEMPLATES;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Inspects `pom.xml` for Spring Boot and Kotlin markers. Presence of the
/// file alone implies a Java project.
pub(super) fn analyze_maven(root: &Path, result: &mut DetectionResult) {
    let content = match fs::read_to_string(root.join("pom.xml")) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read pom.xml: {}", e);
            return;
        }
    };

    if content.contains("spring-boot") || content.contains("springframework") {
        result.add("spring-boot", "Found Spring dependencies in pom.xml");
        result.add("java", "Spring project implies Java");
    }

    if content.contains("kotlin-stdlib") || content.contains("kotlin-maven-plugin") {
        result.add("kotlin", "Found Kotlin dependencies in pom.xml");
    } else {
        result.add("java", "Found pom.xml (Java project)");
    }
}

/// Inspects `build.gradle`/`build.gradle.kts` for Android, Spring Boot, and
/// Kotlin plugin markers.
pub(super) fn analyze_gradle(root: &Path, gradle_file: &str, result: &mut DetectionResult) {
    let content = match fs::read_to_string(root.join(gradle_file)) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read {}: {}", gradle_file, e);
            return;
        }
    };

    if content.contains("com.android.application") || content.contains("com.android.library") {
        result.add("android", "Found Android plugin in gradle");
    }
    if content.contains("org.springframework.boot") {
        result.add("spring-boot", "Found Spring Boot plugin");
    }
    if content.contains("kotlin") {
        result.add("kotlin", "Found Kotlin plugin");
    }
}

/// Inspects `package.json` dependencies against every template's
/// package-match list, then attributes the base language: `typescript` when
/// the dependency is present, `javascript` otherwise.
pub(super) fn analyze_node(root: &Path, result: &mut DetectionResult) {
    let deps = match read_json_deps(&root.join("package.json"), &["dependencies", "devDependencies"])
    {
        Some(deps) => deps,
        None => return,
    };

    for tmpl in TEMPLATES {
        if let Some(matched) = tmpl.package_match.iter().find(|p| deps.contains(**p)) {
            result.add(tmpl.id, format!("Dependency: {}", matched));
        }
    }

    if deps.contains("typescript") {
        result.add("typescript", "Found typescript dependency");
    } else if !result.contains("typescript") {
        result.add("javascript", "Found package.json (Node project)");
    }
}

/// Inspects `composer.json` requirements against package-match lists.
/// Presence of the file alone implies PHP.
pub(super) fn analyze_composer(root: &Path, result: &mut DetectionResult) {
    let deps = match read_json_deps(&root.join("composer.json"), &["require", "require-dev"]) {
        Some(deps) => deps,
        None => return,
    };

    for tmpl in TEMPLATES {
        if let Some(matched) = tmpl.package_match.iter().find(|p| deps.contains(**p)) {
            result.add(tmpl.id, format!("Composer dependency: {}", matched));
        }
    }

    result.add("php", "Found composer.json");
}

/// Reads a JSON manifest and returns the union of the key sets of the named
/// dependency tables. `None` on any read or parse failure.
fn read_json_deps(path: &Path, tables: &[&str]) -> Option<HashSet<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            return None;
        }
    };
    let manifest: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not parse {}: {}", path.display(), e);
            return None;
        }
    };

    let mut deps = HashSet::new();
    for table in tables {
        if let Some(map) = manifest.get(table).and_then(Value::as_object) {
            deps.extend(map.keys().cloned());
        }
    }
    Some(deps)
}
