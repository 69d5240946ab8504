use anyhow::Result;
use profilepage::generate::{generate, generate_to_string};
use profilepage::storage::compute_hash;
use serde_json::json;
use std::fs;

use super::IntegrationHarness;
use crate::support::profile_fixture::{ada_json, assert_in_order, write_json};

#[test]
fn worked_example_produces_expected_page() -> Result<()> {
    let harness = IntegrationHarness::new();
    let request = harness.request();
    write_json(&request.input, &ada_json());

    let outcome = generate(&request)?;
    assert_eq!(outcome.output, request.output);
    assert_eq!(outcome.specialties, 2);
    assert_eq!(outcome.experience, 1);

    let html = fs::read_to_string(&request.output)?;
    assert_eq!(outcome.bytes, html.len());
    assert_eq!(outcome.hash, compute_hash(html.as_bytes()));
    assert_in_order(
        &html,
        &[
            "<title>Ada Lovelace — Profile</title>",
            "<h1>Ada Lovelace</h1>",
            "<li>Email: a@x.com</li>",
            "<li>Phone: 555-0100</li>",
            "<li>Location: London</li>",
            "<li>Algorithms</li>",
            "<li>Mathematics</li>",
            "<h3>Analyst — Engine Co</h3>",
            "<p>1840-1845 | London</p>",
            "<p>Designed programs.</p>",
            "<p class=\"closing\">Thank you.</p>",
            "</html>",
        ],
    );
    Ok(())
}

#[test]
fn repeated_generation_is_byte_identical() -> Result<()> {
    let harness = IntegrationHarness::new();
    let request = harness.request();
    write_json(&request.input, &ada_json());

    let first = generate(&request)?;
    let second = generate(&request)?;
    assert_eq!(first.hash, second.hash);
    assert_eq!(
        generate_to_string(&request)?.as_str(),
        fs::read_to_string(&request.output)?
    );
    assert_eq!(harness.entries(), vec!["profile.html", "profile.json"]);
    Ok(())
}

#[test]
fn sparse_profile_renders_empty_sections() -> Result<()> {
    let harness = IntegrationHarness::new();
    let request = harness.request();
    write_json(
        &request.input,
        &json!({
            "name": "Grace Hopper",
            "headline": "Rear Admiral",
            "summary": "Compilers.",
            "contact": {"email": "g@navy.mil", "phone": "555-0199", "location": "Arlington"},
            "experience": [{
                "role": "Programmer",
                "company": "Harvard",
                "period": "1944",
                "details": "Mark I."
            }]
        }),
    );

    let outcome = generate(&request)?;
    assert_eq!(outcome.specialties, 0);
    let html = fs::read_to_string(&request.output)?;
    assert!(html.contains("<h2>Specialties</h2>\n<ul>\n</ul>"));
    assert!(html.contains("<p>1944 | </p>"));
    assert!(html.contains("<p class=\"closing\"></p>"));
    assert!(!html.contains("null"));
    Ok(())
}

#[test]
fn markup_in_fields_is_rendered_as_text() -> Result<()> {
    let harness = IntegrationHarness::new();
    let request = harness.request();
    let mut profile = ada_json();
    profile["name"] = json!("<em>Ada</em> & Co");
    profile["specialties"] = json!(["</ul><script>steal()</script>"]);
    write_json(&request.input, &profile);

    generate(&request)?;
    let html = fs::read_to_string(&request.output)?;
    assert!(html.contains("<title>&lt;em&gt;Ada&lt;/em&gt; &amp; Co — Profile</title>"));
    assert!(html.contains("<li>&lt;/ul&gt;&lt;script&gt;steal()&lt;/script&gt;</li>"));
    assert!(!html.contains("<script>"));
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    Ok(())
}
