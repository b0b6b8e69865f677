use async_trait::async_trait;
use interaction_engine::mock::{MockBackend, MockError};
use interaction_engine::{
    DraftEntity, EngineError, RenderState, ResourceState, Section, SectionController, TagSet,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};

// --- Test Section ---

#[derive(Debug, Clone, Default, PartialEq)]
struct HarvestQuery {
    field: String,
}

struct Harvest;

#[async_trait]
impl Section for Harvest {
    const NAME: &'static str = "harvest";
    type Input = HarvestQuery;
    type Output = Vec<String>;
    type Service = MockBackend<HarvestQuery, Vec<String>>;
    type Error = MockError;

    fn validate(input: &HarvestQuery) -> Result<(), EngineError> {
        if input.field.trim().is_empty() {
            return Err(EngineError::MissingInput("field"));
        }
        Ok(())
    }

    async fn fetch(
        service: Arc<MockBackend<HarvestQuery, Vec<String>>>,
        input: HarvestQuery,
    ) -> Result<Vec<String>, MockError> {
        service.call(input).await
    }

    fn is_empty(output: &Vec<String>) -> bool {
        output.is_empty()
    }
}

fn query(field: &str) -> HarvestQuery {
    HarvestQuery {
        field: field.to_string(),
    }
}

// --- Tests ---

#[tokio::test(start_paused = true)]
async fn test_section_full_lifecycle() {
    let mut backend = MockBackend::new();
    backend
        .expect_call()
        .after(Duration::from_millis(700))
        .return_ok(vec!["Wheat".to_string(), "Rice".to_string()]);
    backend
        .expect_call()
        .after(Duration::from_millis(700))
        .return_err("service unavailable");
    backend
        .expect_call()
        .after(Duration::from_millis(700))
        .return_ok(Vec::new());

    let mut section = SectionController::<Harvest>::new(Arc::new(backend.clone()));

    // 1. Nothing entered yet
    assert_eq!(section.render(), RenderState::Prompt);
    assert!(section.submit().is_err());
    assert_eq!(backend.call_count(), 0);

    // 2. Populated
    section.edit_input(|q| q.field = "north".into());
    let started = Instant::now();
    section.submit().unwrap();
    assert_eq!(section.render(), RenderState::Loading);
    section.settled().await;
    assert!(started.elapsed() >= Duration::from_millis(700));
    assert_eq!(
        section.render(),
        RenderState::Populated(vec!["Wheat".to_string(), "Rice".to_string()])
    );

    // 3. Failure is inline and the section stays usable
    section.submit().unwrap();
    section.settled().await;
    assert_eq!(
        section.render(),
        RenderState::Error("Operation failed: service unavailable".into())
    );

    // 4. Empty result differs from the initial prompt
    section.submit().unwrap();
    section.settled().await;
    assert_eq!(section.render(), RenderState::NoResults);

    assert_eq!(backend.calls(), vec![query("north"); 3]);
    backend.verify();
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_call_keeps_submitted_input() {
    let mut backend = MockBackend::new();
    backend
        .expect_call()
        .after(Duration::from_millis(500))
        .return_ok(vec!["Corn".to_string()]);

    let mut section = SectionController::<Harvest>::new(Arc::new(backend.clone()));
    section.edit_input(|q| q.field = "east".into());
    section.submit().unwrap();
    section.edit_input(|q| q.field = "west".into());

    // Refused while pending, no second call reaches the backend
    assert!(matches!(
        section.submit(),
        Err(EngineError::AlreadyInFlight { generation: 1 })
    ));

    section.settled().await;
    assert_eq!(backend.calls(), vec![query("east")]);
    assert_eq!(section.input(), &query("west"));
}

#[tokio::test(start_paused = true)]
async fn test_reset_then_resubmit_wins_over_slow_call() {
    let mut backend = MockBackend::new();
    backend
        .expect_call()
        .after(Duration::from_millis(1_000))
        .return_ok(vec!["old".to_string()]);
    backend
        .expect_call()
        .after(Duration::from_millis(200))
        .return_ok(vec!["new".to_string()]);

    let mut section = SectionController::<Harvest>::new(Arc::new(backend));
    section.edit_input(|q| q.field = "south".into());
    section.submit().unwrap();
    section.reset();
    section.submit().unwrap();

    sleep(Duration::from_millis(1_500)).await;
    let snapshot = section.resource().snapshot();
    assert_eq!(snapshot.generation, 3);
    assert_eq!(snapshot.state, ResourceState::Resolved(vec!["new".to_string()]));
}

#[test]
fn test_draft_with_tag_set_cancel_and_commit() {
    #[derive(Debug, Clone, PartialEq)]
    struct Farm {
        crops: TagSet,
    }

    let mut farm = DraftEntity::new(Farm {
        crops: ["Wheat", "Rice"].into_iter().collect(),
    });

    farm.begin_edit().unwrap();
    farm.update(|f| Farm {
        crops: f.crops.clone().with("Cotton"),
    })
    .unwrap();
    farm.discard();
    assert_eq!(farm.committed().crops.as_slice(), ["Wheat", "Rice"]);

    farm.begin_edit().unwrap();
    farm.update(|f| Farm {
        crops: f.crops.clone().with("Wheat").with("Cotton").without("Rice"),
    })
    .unwrap();
    farm.commit().unwrap();
    assert_eq!(farm.committed().crops.as_slice(), ["Wheat", "Cotton"]);
}
