//! Tuition Billing Engine
//!
//! Billing core of the school-administration platform:
//!
//! - **Pricing** (`pricing`): specificity-cascade price rule resolution
//! - **Billing** (`billing`): monthly charge schedule generation and the
//!   batch billing cycle runner
//! - **Reconciliation** (`reconciliation`): end-of-shift blind cash close
//! - **Database** (`db`): embedded SQLite storage and repositories
//!
//! # Module structure
//!
//! ```text
//! billing-engine/src/
//! ├── config.rs         # environment configuration
//! ├── db/               # pool setup, migrations, repositories
//! ├── pricing/          # price cascade resolver
//! ├── billing/          # money, schedule generator, batch runner
//! ├── reconciliation/   # cash count, shift close state machine
//! └── utils/            # logging, calendar helpers
//! ```

pub mod billing;
pub mod config;
pub mod db;
pub mod pricing;
pub mod reconciliation;
pub mod utils;

// Re-export public types
pub use billing::{BatchBillingRunner, BatchResult, BillingError, FailedEnrollment, GenerationMode};
pub use config::Config;
pub use db::DbService;
pub use db::repository::{RepoError, RepoResult};
pub use reconciliation::{
    CashCount, DeclaredCount, LedgerSource, ReconcileError, ReconciliationEngine,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
