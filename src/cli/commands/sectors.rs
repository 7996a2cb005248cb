use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::Table;
use ansi_term::Colour;

/// Handle the `sectors` command: one line per configured sector.
pub fn handle(cfg: &Config) -> AppResult<()> {
    header(format!(
        "{} sector(s), default: {}, daily target {} min",
        cfg.sectors.len(),
        cfg.default_sector,
        cfg.daily_target_minutes
    ));

    let mut table = Table::with_headers(&[
        "Sector", "Entry", "Exit", "Lunch", "Breaks", "Tolerances", "Punches", "Work days",
    ]);

    for (name, s) in &cfg.sectors {
        let label = if *name == cfg.default_sector {
            Colour::Green.bold().paint(name.as_str()).to_string()
        } else {
            name.clone()
        };

        table.add_row(vec![
            label,
            s.entrada_padrao.to_string(),
            s.saida_padrao.to_string(),
            format!("{} / {} min", s.almoco_inicio, s.almoco_duracao),
            format!("{}/{} min", s.intervalo_manha, s.intervalo_tarde),
            format!(
                "{}/{}/{}/{}",
                s.tolerancia_entrada,
                s.tolerancia_saida,
                s.tolerancia_intervalo,
                s.tolerancia_esquecimento
            ),
            s.picagens_esperadas.to_string(),
            s.dias_trabalho.join(", "),
        ]);
    }

    println!("{}", table.render());
    Ok(())
}
