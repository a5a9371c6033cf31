//! Browser automation adapter. Implements SheetGateway with a headless Chromium.

pub mod chromium;

pub use chromium::ChromiumSheetGateway;
