//! The built-in `axon_backend` blueprint.
//!
//! This is the entire configuration surface of the tool: a fixed root name,
//! an ordered directory list, and an ordered file table mapping each
//! placeholder file to a one-line summary of its future content. Changing
//! the generated layout means editing these constants.

use tracing::debug;

use axgen_core::domain::Blueprint;

const ROOT: &str = "axon_backend";

/// Ordered list of subdirectories, relative to the root.
const DIRECTORIES: &[&str] = &[
    "api/routers",
    "core",
    "data/repositories",
    "services",
    "workers",
    "tests/api",
    "tests/services",
    "tests/data",
];

/// Placeholder files in creation order. Each summary is rendered behind the
/// blueprint's comment prefix as the file's single line of content.
const FILES: &[(&str, &str)] = &[
    ("api/main.py", "FastAPI app instance and router setup"),
    ("api/dependencies.py", "Reusable dependencies (e.g., get_current_user)"),
    ("api/routers/conversations.py", "API endpoints for conversations"),
    ("api/routers/notes.py", "API endpoints for notes"),
    ("api/routers/users.py", "API endpoints for user profiles"),
    ("core/config.py", "Pydantic settings for environment variables"),
    ("core/security.py", "Security utilities (password hashing, JWT)"),
    ("data/models.py", "SQLAlchemy ORM models (database table structures)"),
    ("data/schemas.py", "Pydantic schemas (data validation and API models)"),
    ("data/repositories/base_repository.py", "Optional: A base class for common repository methods"),
    ("data/repositories/conversation_repository.py", "All database logic for conversations"),
    ("data/repositories/note_repository.py", "All database logic for notes"),
    ("services/processing_service.py", "Core business logic for the AI pipeline"),
    ("services/ai_service.py", "Abstraction for all external AI API calls"),
    ("services/notification_service.py", "Logic for sending emails, etc."),
    ("workers/celery_app.py", "Celery app instance and configuration"),
    ("workers/tasks.py", "Celery tasks that call the service layer"),
    (".env", "Environment variables: DATABASE_URL, OPENAI_API_KEY, GEMINI_API_KEY"),
    ("requirements.txt", "fastapi, uvicorn, celery"),
    (".gitignore", "Ignore __pycache__/, .env and virtualenv directories"),
];

/// Assemble the built-in blueprint from the static tables.
pub fn axon_backend() -> Blueprint {
    let mut blueprint = Blueprint::new(ROOT);
    for dir in DIRECTORIES {
        blueprint = blueprint.with_directory(dir);
    }
    for (path, summary) in FILES {
        blueprint = blueprint.with_file(path, *summary);
    }
    debug!(
        directories = DIRECTORIES.len(),
        files = FILES.len(),
        "Assembled built-in blueprint"
    );
    blueprint
}
