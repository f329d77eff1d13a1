use airq_core::{DisplaySink, MetricsRecord};

/// Terminal rendering surface: the card's fields become stdout lines.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

fn print_fields(aqi: &str, pm2_5: &str, pm10: &str, ozone: &str, co: &str) {
    println!("  US AQI : {aqi}");
    println!("  PM2.5  : {pm2_5}");
    println!("  PM10   : {pm10}");
    println!("  Ozone  : {ozone}");
    println!("  CO     : {co}");
}

impl DisplaySink for TerminalDisplay {
    fn set_title(&mut self, text: &str) {
        println!("\n{text}");
    }

    fn set_subtitle(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{text}");
        }
    }

    fn render_metrics(&mut self, record: &MetricsRecord) {
        print_fields(
            &record.aqi_text(),
            &record.pm2_5_text(),
            &record.pm10_text(),
            &record.ozone_text(),
            &record.carbon_monoxide_text(),
        );
    }

    fn render_no_data(&mut self) {
        self.render_metrics(&MetricsRecord::default());
    }
}
