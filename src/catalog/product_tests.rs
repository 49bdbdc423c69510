//! Tests for catalog/product

use super::*;

fn sample_product() -> Product {
    Product {
        key: "payments".to_string(),
        title: "Payments".to_string(),
        description: "Accept payments".to_string(),
        overview: Overview {
            content: "Core product".to_string(),
            key_features: vec!["Cards".to_string(), "Wallets".to_string()],
        },
        apis: vec![ApiDoc {
            key: "intents".to_string(),
            title: "Payment Intents API".to_string(),
            description: "Dynamic flows".to_string(),
            endpoint: "POST /v1/payment_intents".to_string(),
            example: "stripe.paymentIntents.create()".to_string(),
            best_practices: vec!["Use idempotency keys".to_string()],
        }],
        integration: Integration {
            steps: vec![IntegrationStep {
                title: "1. Install".to_string(),
                details: "npm install stripe".to_string(),
            }],
        },
    }
}

#[test]
fn test_section_tab_all_and_index() {
    let tabs = SectionTab::all();
    assert_eq!(tabs.len(), 3);
    for (index, tab) in tabs.iter().enumerate() {
        assert_eq!(tab.index(), index);
        assert_eq!(SectionTab::from_index(index), *tab);
    }
    assert_eq!(SectionTab::from_index(42), SectionTab::Overview);
}

#[test]
fn test_section_tab_next_prev_wrap() {
    assert_eq!(SectionTab::Overview.next(), SectionTab::Apis);
    assert_eq!(SectionTab::Integration.next(), SectionTab::Overview);
    assert_eq!(SectionTab::Overview.prev(), SectionTab::Integration);
    assert_eq!(SectionTab::Apis.prev(), SectionTab::Overview);
}

#[test]
fn test_section_tab_names_and_shortcuts() {
    assert_eq!(SectionTab::Overview.name(), "Overview");
    assert_eq!(SectionTab::Apis.name(), "APIs");
    assert_eq!(SectionTab::Integration.name(), "Integration");
    assert_eq!(SectionTab::Overview.shortcut(), 'o');
    assert_eq!(SectionTab::Apis.shortcut(), 'a');
    assert_eq!(SectionTab::Integration.shortcut(), 'i');
}

#[test]
fn test_section_tab_deserializes_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        tab: SectionTab,
    }
    let wrapper: Wrapper = toml::from_str("tab = \"integration\"").unwrap();
    assert_eq!(wrapper.tab, SectionTab::Integration);
}

#[test]
fn test_overview_section_node() {
    let node = sample_product().section_node(SectionTab::Overview);
    assert_eq!(
        node,
        ContentNode::record([
            ("", ContentNode::text("Core product")),
            ("Key Features", ContentNode::bullets(&["Cards", "Wallets"])),
        ])
    );
}

#[test]
fn test_apis_section_keeps_code_verbatim() {
    let node = sample_product().section_node(SectionTab::Apis);

    let ContentNode::Sequence(apis) = node else {
        panic!("expected sequence");
    };
    let ContentNode::Record(fields) = &apis[0] else {
        panic!("expected record");
    };
    assert_eq!(fields[0].0, "Payment Intents API");

    let ContentNode::Record(api_fields) = &fields[0].1 else {
        panic!("expected record");
    };
    let labels: Vec<&str> = api_fields.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["", "Endpoint", "Example Implementation", "Best Practices"]
    );
    assert_eq!(
        api_fields[1].1,
        ContentNode::verbatim("POST /v1/payment_intents")
    );
}

#[test]
fn test_integration_section_lists_steps() {
    let node = sample_product().section_node(SectionTab::Integration);
    assert_eq!(
        node,
        ContentNode::record([(
            "Integration Steps",
            ContentNode::Sequence(vec![ContentNode::record([(
                "1. Install",
                ContentNode::text("npm install stripe"),
            )])]),
        )])
    );
}

#[test]
fn test_product_node_starts_with_description() {
    let ContentNode::Record(fields) = sample_product().node(SectionTab::Apis) else {
        panic!("expected record");
    };
    assert_eq!(fields[0], (String::new(), ContentNode::text("Accept payments")));
    assert_eq!(fields[1].0, "APIs");
}
