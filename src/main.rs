use fractal_viewer::{
    Complex, FractalKinds, PpmFilePresenter, Resolution, StillRenderController, ViewParameters,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut controller = StillRenderController::new(PpmFilePresenter::new());
    let mandelbrot = ViewParameters::with_resolution(Resolution::new(WIDTH, HEIGHT));
    let julia = ViewParameters {
        fractal_type: FractalKinds::Julia,
        center: Complex::ZERO,
        ..mandelbrot
    };

    controller.generate(&mandelbrot)?;
    controller.write("output/mandelbrot.ppm")?;

    controller.generate(&julia)?;
    controller.write("output/julia.ppm")?;

    Ok(())
}
