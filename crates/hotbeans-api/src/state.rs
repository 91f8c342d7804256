//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use hotbeans_core::config::AppConfig;
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::DocumentStore;
use hotbeans_database::DocumentRepository;
use hotbeans_realtime::{ChatRelay, ConnectionRegistry};
use hotbeans_service::{
    ApplicationService, ChatService, DocumentUploadService, ImageUploadService, StatusService,
};
use hotbeans_storage::{ImageNormalizer, LocalStorageProvider};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// Document store backing every collection
    pub store: Arc<dyn DocumentStore>,
    /// Root for normalized images
    pub images: Arc<LocalStorageProvider>,
    /// Root for uploaded documents
    pub uploads: Arc<LocalStorageProvider>,

    // ── Services ─────────────────────────────────────────────
    /// Status check service
    pub status_service: StatusService,
    /// Chat message service
    pub chat_service: ChatService,
    /// CV/document upload service
    pub document_upload_service: DocumentUploadService,
    /// Image upload service
    pub image_upload_service: ImageUploadService,
    /// Job application service
    pub application_service: ApplicationService,

    // ── Realtime ─────────────────────────────────────────────
    /// Chat relay and its connection registry
    pub relay: ChatRelay,
}

impl AppState {
    /// Wire every service over the given store.
    ///
    /// Creates the images and uploads directories if they are missing.
    pub async fn initialize(config: AppConfig, store: Arc<dyn DocumentStore>) -> AppResult<Self> {
        let images = Arc::new(LocalStorageProvider::new(&config.storage.images_dir).await?);
        let uploads = Arc::new(LocalStorageProvider::new(&config.storage.uploads_dir).await?);

        let status_service = StatusService::new(
            DocumentRepository::new(Arc::clone(&store)),
            config.limits.status_checks,
        );
        let chat_service = ChatService::new(
            DocumentRepository::new(Arc::clone(&store)),
            config.chat.clone(),
        );
        let document_upload_service = DocumentUploadService::new(
            DocumentRepository::new(Arc::clone(&store)),
            Arc::clone(&uploads),
            config.limits.uploads,
        );
        let image_upload_service =
            ImageUploadService::new(Arc::clone(&images), ImageNormalizer::default());
        let application_service = ApplicationService::new(
            DocumentRepository::new(Arc::clone(&store)),
            config.limits.job_applications,
        );

        let relay = ChatRelay::new(Arc::new(ConnectionRegistry::new()), chat_service.clone());

        tracing::info!(
            backend = store.backend(),
            images_dir = %images.root().display(),
            uploads_dir = %uploads.root().display(),
            "Application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            store,
            images,
            uploads,
            status_service,
            chat_service,
            document_upload_service,
            image_upload_service,
            application_service,
            relay,
        })
    }
}
