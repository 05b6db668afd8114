//! Console output

use offside_cv::{AnalysisResult, Detection};

pub fn print_detection(detection: &Detection) {
    println!("Image: {}x{}", detection.width, detection.height);
    println!("Red team count: {}", detection.red_team.len());
    for p in &detection.red_team {
        println!("  red  {p}");
    }
    println!("Blue team count: {}", detection.blue_team.len());
    for p in &detection.blue_team {
        println!("  blue {p}");
    }
    match detection.ball {
        Some(ball) => println!("Ball: {ball}"),
        None => println!("Ball: not found"),
    }
}

pub fn print_result(result: &AnalysisResult) {
    let line = result.offside_line;
    println!("Possession: {}", result.possession);
    println!("Offside line ({} defence): x = {}", line.defending, line.x);
    for p in &result.offside_players {
        println!("  offside {p}");
    }
    println!("{}", result.summary());
}
