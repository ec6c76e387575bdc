mod config_init;
mod navigation_scenarios;
