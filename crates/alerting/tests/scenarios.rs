use alerting::{
    Alert, AlertError, AlertProcessor, FilterCriteria, PriorityBreakdown, SeverityLevel,
};

fn alert(
    id: &str,
    severity: &str,
    service: &str,
    component: &str,
    value: f64,
    threshold: f64,
) -> Alert {
    Alert {
        id: id.to_string(),
        timestamp: "2024-01-15T10:30:00Z".to_string(),
        service: service.to_string(),
        component: component.to_string(),
        severity: severity.to_string(),
        metric: "error_rate".to_string(),
        value,
        threshold,
        description: "error rate above threshold".to_string(),
    }
}

#[test]
fn payment_database_incident() {
    let processor = AlertProcessor::from_source(&vec![
        alert("alert-001", "critical", "payment-processor", "db", 95.0, 50.0),
        alert("alert-002", "info", "payment-processor", "db", 10.0, 10.0),
    ])
    .unwrap();

    let groups = processor.group(None);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].service, "payment-processor");
    assert_eq!(groups[0].component, "db");
    assert_eq!(groups[0].total_alerts, 2);
    assert_eq!(groups[0].severity_counts.len(), 2);
    assert_eq!(groups[0].severity_counts["critical"], 1);
    assert_eq!(groups[0].severity_counts["info"], 1);

    let breakdown = PriorityBreakdown::compute(processor.alerts());
    assert_eq!(
        breakdown.severity_score,
        f64::from(SeverityLevel::Critical.weight() + SeverityLevel::Info.weight())
    );
    assert!((processor.score(processor.alerts()) - 19.2).abs() < 1e-9);
}

#[test]
fn per_group_scores_rank_origins() {
    let processor = AlertProcessor::from_source(&vec![
        alert("a1", "warning", "checkout", "api", 110.0, 100.0),
        alert("a2", "critical", "payment-processor", "db", 300.0, 100.0),
        alert("a3", "critical", "payment-processor", "db", 250.0, 100.0),
        alert("a4", "info", "checkout", "api", 101.0, 100.0),
    ])
    .unwrap();

    let mut ranked: Vec<_> = processor
        .group(None)
        .into_iter()
        .map(|g| (processor.score(&g.alerts), g.service))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    assert_eq!(ranked[0].1, "payment-processor");
    assert_eq!(ranked[1].1, "checkout");
}

#[test]
fn summary_reports_bad_timestamp() {
    let mut broken = alert("a2", "info", "checkout", "api", 1.0, 1.0);
    broken.timestamp = "2024-13-45T99:00:00Z".to_string();
    let processor = AlertProcessor::from_source(&vec![
        alert("a1", "info", "checkout", "api", 1.0, 1.0),
        broken,
    ])
    .unwrap();

    // Passes that never look at timestamps still work
    assert_eq!(processor.group(None).len(), 1);
    assert_eq!(
        processor
            .filter(&FilterCriteria::new().with_service("CHECKOUT"))
            .unwrap()
            .len(),
        2
    );

    match processor.summarize(None) {
        Err(AlertError::Parse { alert_id, .. }) => assert_eq!(alert_id, "a2"),
        other => panic!("expected parse error, got {:?}", other),
    }
}
