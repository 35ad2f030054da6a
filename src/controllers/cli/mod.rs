pub mod plot_cli;
