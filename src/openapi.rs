use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mood Tracker API",
        version = "0.1.0",
        description = "Mood and trigger logging, clinician dashboard and voice check-in webhook"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Ops
        crate::handlers::health::health_check,

        // Webhook
        crate::handlers::webhook_handler::vapi_webhook,

        // Client view
        crate::handlers::triggers_handler::get_triggers,
        crate::handlers::entries_handler::create_entry,
        crate::handlers::calls_handler::start_call,

        // Dashboard
        crate::handlers::patients_handler::get_patients,
        crate::handlers::patients_handler::get_patient,
    ),
    components(
        schemas(
            crate::models::Patient,
            crate::models::PatientDetails,
            crate::models::Trigger,
            crate::models::TriggerOption,
            crate::models::TriggerHistoryEntry,
            crate::models::MoodHistoryView,
            crate::models::ChartPoint,

            crate::models::CreateEntryInput,
            crate::models::EntryMutationResponse,
            crate::models::StartCallInput,

            crate::models::WebhookPayload,
            crate::models::WebhookMessage,
            crate::models::CallAnalysis,
            crate::models::WebhookAck,
        )
    ),
    tags(
        (name = "ops", description = "Health check"),
        (name = "webhook", description = "Voice assistant call reports"),
        (name = "client", description = "Client mood and trigger entry"),
        (name = "dashboard", description = "Clinician patient dashboard"),
    )
)]
pub struct ApiDoc;
