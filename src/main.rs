fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelbrot_zoom::PngFilePresenter::new();
    let mut controller = mandelbrot_zoom::CliPlotController::new(presenter);

    controller.generate()?;
    controller.write("output/mandelbrot.png")?;

    Ok(())
}
