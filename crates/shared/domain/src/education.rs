use serde::{Deserialize, Serialize};

/// Identifies one entry of the education catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationKey {
    UnauthorizedOperator,
    Deceptive,
    Cta,
    Operator,
    Default,
}

/// A fixed educational card shown to the end user.
///
/// Instances only exist as `static` catalog entries; the fields borrow `'static` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationMessage {
    pub key: EducationKey,
    pub title: &'static str,
    pub body: &'static str,
    pub help_link_text: &'static str,
}

impl EducationMessage {
    #[must_use]
    pub const fn new(
        key: EducationKey,
        title: &'static str,
        body: &'static str,
        help_link_text: &'static str,
    ) -> Self {
        Self { key, title, body, help_link_text }
    }

    /// Looks up the catalog entry for `key`.
    #[must_use]
    pub fn for_key(key: EducationKey) -> &'static Self {
        match key {
            EducationKey::UnauthorizedOperator => &CATALOG[0],
            EducationKey::Deceptive => &CATALOG[1],
            EducationKey::Cta => &CATALOG[2],
            EducationKey::Operator => &CATALOG[3],
            EducationKey::Default => &CATALOG[4],
        }
    }
}

/// Every educational card, in selection priority order.
pub static CATALOG: [EducationMessage; 5] = [
    EducationMessage::new(
        EducationKey::UnauthorizedOperator,
        "Risco Elevado: Operadora Não Autorizada",
        "A(s) operadora(s) mencionada(s) nesta página NÃO possuem autorização da Secretaria de \
         Prêmios e Apostas (SPA) do Ministério da Fazenda. O risco de fraude é maior.",
        "Verifique a lista oficial de operadoras autorizadas",
    ),
    EducationMessage::new(
        EducationKey::Deceptive,
        "Cuidado: Promessa de Ganho Fácil",
        "Conteúdos que prometem 'estratégia infalível' ou 'hack' são enganosos. Em jogos de azar \
         (RNG), o resultado é aleatório e a casa sempre tem a vantagem (RTP).",
        "Entenda o que é RNG e RTP",
    ),
    EducationMessage::new(
        EducationKey::Cta,
        "Alerta: Incentivo ao Cadastro",
        "Este conteúdo está ativamente incentivando o cadastro ou depósito. Bônus são estratégias \
         para atrair jogadores, mas geralmente possuem regras que dificultam saques reais.",
        "Precisa de ajuda? Fale com o AntiBet Coach.",
    ),
    EducationMessage::new(
        EducationKey::Operator,
        "Aviso: Publicidade de Aposta",
        "Esta página promove ativamente uma ou mais casas de apostas. O jogo pode causar \
         dependência financeira e emocional.",
        "Conheça os riscos (DSM-5)",
    ),
    EducationMessage::new(
        EducationKey::Default,
        "Jogo Envolve Risco Real",
        "Todo jogo de azar envolve risco real de perda financeira e pode levar à dependência. \
         Não existe método garantido para ganhar.",
        "Precisa de ajuda? Fale com o AntiBet Coach.",
    ),
];
