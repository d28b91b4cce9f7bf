use stiffx::{frame_stiffness, render_plain, FrameParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sweep a portal column through a quarter turn
    for angle_degrees in [0.0, 30.0, 60.0, 90.0] {
        let parameters = FrameParameters {
            angle_degrees,
            ..FrameParameters::default()
        };
        let matrix = frame_stiffness(parameters)?;
        println!("theta = {angle_degrees} deg");
        println!("{}\n", render_plain(&matrix, 3));
    }

    // Zero length is rejected rather than producing infinities
    let degenerate = FrameParameters {
        length: 0.0,
        ..FrameParameters::default()
    };
    if let Err(error) = frame_stiffness(degenerate) {
        println!("rejected: {error}");
    }

    Ok(())
}
