use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the interface labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

/// Interface strings for one locale.
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_title: &'static str,
    pub search_hint: &'static str,
    pub category_title: &'static str,
    pub all_categories: &'static str,
    pub featured: &'static str,
    pub loading: &'static str,
    pub loading_more: &'static str,
    pub end_of_list: &'static str,
    pub no_results: &'static str,
    pub load_failed: &'static str,
    pub retry_hint: &'static str,
    pub help: &'static str,
}

static EN: Labels = Labels {
    title: "Daily Thoughts & Reflections",
    subtitle: "Wisdom from great minds to inspire your day",
    search_title: "Search",
    search_hint: "search thoughts or authors...",
    category_title: "Category",
    all_categories: "All",
    featured: "Featured thought",
    loading: "Loading thoughts...",
    loading_more: "Loading more thoughts...",
    end_of_list: "You have seen every thought! Scroll up to revisit, or search.",
    no_results: "No thoughts match your criteria.",
    load_failed: "Failed to load thoughts",
    retry_hint: "press r to retry, q to quit",
    help: "/ search  Tab category  Enter select  n random  a load all  x clear  r reload  q quit",
};

static PT: Labels = Labels {
    title: "Pensamentos e Reflexões Diárias",
    subtitle: "Sabedoria de grandes mentes para inspirar seu dia",
    search_title: "Busca",
    search_hint: "buscar pensamentos ou autores...",
    category_title: "Categoria",
    all_categories: "Todas",
    featured: "Pensamento em Destaque",
    loading: "Carregando pensamentos...",
    loading_more: "Carregando mais pensamentos...",
    end_of_list: "Você viu todos os pensamentos! Role para cima ou use a busca.",
    no_results: "Nenhum pensamento encontrado com seus critérios.",
    load_failed: "Erro ao carregar pensamentos",
    retry_hint: "pressione r para tentar novamente, q para sair",
    help: "/ busca  Tab categoria  Enter destacar  n aleatório  a tudo  x limpar  r recarregar  q sair",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }

    /// Stats line under the header; the parenthetical appears only when a
    /// filter is narrowing the collection.
    pub fn stats(&self, shown: usize, filtered: usize, total: usize) -> String {
        match self {
            Locale::En => {
                if filtered == total {
                    format!("showing {} of {} thoughts", shown, filtered)
                } else {
                    format!(
                        "showing {} of {} thoughts (filtered from {} total)",
                        shown, filtered, total
                    )
                }
            }
            Locale::Pt => {
                if filtered == total {
                    format!("mostrando {} de {} pensamentos", shown, filtered)
                } else {
                    format!(
                        "mostrando {} de {} pensamentos (filtrados de {} no total)",
                        shown, filtered, total
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_hides_parenthetical_when_unfiltered() {
        let line = Locale::En.stats(20, 25, 25);
        assert_eq!(line, "showing 20 of 25 thoughts");
    }

    #[test]
    fn test_stats_mentions_total_when_filtered() {
        let line = Locale::Pt.stats(2, 2, 25);
        assert!(line.contains("filtrados de 25"));
    }
}
