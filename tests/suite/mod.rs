mod app_flow;
mod custom_content;
mod walkthrough;
