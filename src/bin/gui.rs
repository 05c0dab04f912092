fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter_factory = fractal_viewer::PixelsPresenterFactory::new();
    let command = fractal_viewer::RunGuiCommand::new(presenter_factory);

    command.execute()
}
