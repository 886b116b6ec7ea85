//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::audit::AuditResult;
use crate::record::ClassMap;

/// Prints dead classes in plain text format.
pub fn print_plain(dead: &ClassMap) {
    if dead.is_empty() {
        println!("No dead classes found.");
    } else {
        println!("DEAD CLASSES ({}):", dead.len());
        for name in dead.names() {
            println!("- {}", name);
        }
    }
}

/// Prints a full usage report in plain text format: one line per declared
/// class with its corpus usage count, optionally followed by its contexts.
pub fn print_report_plain(report: &ClassMap, show_contexts: bool) {
    for rec in report.records() {
        println!("{}: {}", rec.name, rec.count);
        if show_contexts {
            for context in &rec.contexts {
                println!("    {}", context);
            }
        }
    }
}

/// Prints an audit result in JSON format.
///
/// Falls back to a simple format if serialization fails (should never happen
/// with these value types, but every case is handled).
pub fn print_json(result: &AuditResult) {
    let payload = json!({
        "declared": result.stats.declared_count,
        "used": result.stats.used_count,
        "dead": result.stats.dead_count,
        "report": result.report.records().collect::<Vec<_>>(),
        "unused": result.unused.names().collect::<Vec<_>>(),
    });

    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            // Fallback: output in a simpler format
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!(
                "{{\"dead\": {:?}}}",
                result.unused.names().collect::<Vec<_>>()
            );
        }
    }
}
