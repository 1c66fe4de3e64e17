//! UI Components
//!
//! Reusable Leptos components.

pub mod columns;

mod ai_actions;
mod collection_view;
mod create_client;
mod create_household;
mod create_task;
mod section;
mod stat_card;

pub use ai_actions::AiActions;
pub use collection_view::CollectionView;
pub use create_client::CreateClient;
pub use create_household::CreateHousehold;
pub use create_task::CreateTask;
pub use section::Section;
pub use stat_card::StatCard;
