// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catdeck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    catdeck::app::run()
}
