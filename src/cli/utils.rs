use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({ "success": true, "message": message });
            if let Some(data) = data {
                response["data"] = data;
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str, error_code: Option<&str>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({ "success": false, "error": message });
            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Print a JSON object either raw or as aligned `key: value` lines.
pub fn output_record(output_format: &OutputFormat, record: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => match record.as_object() {
            Some(fields) => {
                let width = fields.keys().map(String::len).max().unwrap_or(0);
                for (key, value) in fields {
                    println!("{:width$}  {}", key, display_value(value), width = width);
                }
            }
            None => println!("{}", display_value(record)),
        },
    }
    Ok(())
}

/// Print thesis rows as a table in text mode.
pub fn output_theses(output_format: &OutputFormat, theses: &Value) -> anyhow::Result<()> {
    if *output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(theses)?);
        return Ok(());
    }

    let rows = theses.as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.is_empty() {
        println!("No theses found");
        return Ok(());
    }

    println!("{:<6} {:<6} {:<9} {:<24} TOPIC", "ID", "YEAR", "VALIDATED", "ADVISOR");
    for row in rows {
        let advisor = format!(
            "{} {}",
            display_value(&row["advisorFirstName"]),
            display_value(&row["advisorLastName"])
        );
        println!(
            "{:<6} {:<6} {:<9} {:<24} {}",
            display_value(&row["id"]),
            display_value(&row["year"]),
            if row["topicValidation"].as_bool().unwrap_or(false) { "yes" } else { "no" },
            advisor.trim(),
            display_value(&row["topic"]),
        );
    }
    Ok(())
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
