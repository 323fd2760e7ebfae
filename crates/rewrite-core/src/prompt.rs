//! Instruction assembly and prompt fingerprinting.
//!
//! The instruction is fully determined by its inputs: the same keyword,
//! content, parameters and collaborator lists always produce the same text.

use std::fmt::Write;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::metrics::LONG_CONTENT_WORDS;
use crate::params::RewriteParams;
use crate::result::{CaseStudy, InternalLink};

/// Meta description character limit.
pub const META_DESCRIPTION_MAX_CHARS: usize = 155;

/// Most FAQ entries kept in a result.
pub const MAX_FAQ_ITEMS: usize = 8;

/// A named content-quality dimension and its rules.
#[derive(Debug, Clone, Copy)]
pub struct QualityDimension {
    pub name: &'static str,
    pub rules: &'static [&'static str],
}

/// The twelve dimensions every rewrite is judged on.
pub const QUALITY_DIMENSIONS: [QualityDimension; 12] = [
    QualityDimension {
        name: "CONTEÚDO ÚTIL (HELPFUL CONTENT)",
        rules: &[
            "Responda de forma direta à intenção de busca logo no primeiro parágrafo",
            "Entregue informação prática que o leitor possa aplicar imediatamente",
            "Elimine enchimento, repetições e generalidades sem valor",
        ],
    },
    QualityDimension {
        name: "E-E-A-T (EXPERIÊNCIA, ESPECIALIDADE, AUTORIDADE, CONFIABILIDADE)",
        rules: &[
            "Demonstre experiência real com exemplos concretos",
            "Use dados verificáveis e indique a origem de cada número",
            "Mantenha tom profissional e transparente sobre limitações",
        ],
    },
    QualityDimension {
        name: "ESTRUTURA E LEGIBILIDADE",
        rules: &[
            "Use um único <h1> e organize o texto com <h2> e <h3> descritivos",
            "Parágrafos curtos, com no máximo 3 ou 4 frases",
            "Use listas <ul>/<ol> para passos, vantagens e comparações",
        ],
    },
    QualityDimension {
        name: "OTIMIZAÇÃO DA PALAVRA-CHAVE",
        rules: &[
            "Inclua a palavra-chave no título, no primeiro parágrafo e em pelo menos um subtítulo",
            "Mantenha densidade natural entre 1% e 2%, sem repetição forçada",
            "Use variações semânticas e sinônimos da palavra-chave",
        ],
    },
    QualityDimension {
        name: "OTIMIZAÇÃO PARA IA E BUSCA GENERATIVA",
        rules: &[
            "Escreva respostas autossuficientes que possam ser citadas isoladamente",
            "Defina termos importantes em frases curtas e objetivas",
            "Prefira afirmações específicas a frases vagas",
        ],
    },
    QualityDimension {
        name: "LINGUAGEM SIMPLES",
        rules: &[
            "Escreva para um leitor leigo, em voz ativa",
            "Evite jargões; quando inevitáveis, explique-os",
            "Aplique todas as substituições de palavras listadas abaixo",
        ],
    },
    QualityDimension {
        name: "PERGUNTAS FREQUENTES (FAQ)",
        rules: &[
            "Crie até 8 perguntas reais que o público faz sobre o tema",
            "Responda cada pergunta em 2 a 4 frases",
            "Não repita perguntas já respondidas no corpo do texto",
        ],
    },
    QualityDimension {
        name: "ESTUDOS DE CASO E DADOS",
        rules: &[
            "Use no máximo 3 estudos de caso, priorizando os fornecidos abaixo",
            "Inclua métricas de resultado sempre que disponíveis",
            "Nunca invente empresas, números ou resultados",
        ],
    },
    QualityDimension {
        name: "CITAÇÕES E FONTES",
        rules: &[
            "Associe cada afirmação relevante a uma fonte confiável",
            "Prefira fontes oficiais, acadêmicas ou de referência no setor",
            "Informe a URL da fonte quando conhecida",
        ],
    },
    QualityDimension {
        name: "LINKS INTERNOS",
        rules: &[
            "Insira os links internos sugeridos com textos âncora naturais",
            "Não use \"clique aqui\" como texto âncora",
            "Distribua os links ao longo do texto, não apenas no final",
        ],
    },
    QualityDimension {
        name: "CONTEÚDO RICO E ELEMENTOS VISUAIS",
        rules: &[
            "Sugira gráficos e infográficos que resumam dados do texto",
            "Sugira imagens com descrição, texto alternativo e posição no artigo",
            "Use tabelas, destaques e checklists quando ajudarem a leitura",
        ],
    },
    QualityDimension {
        name: "SCHEMA MARKUP E ENTIDADES",
        rules: &[
            "Identifique marcas, pessoas, locais e conceitos citados",
            "Indique quais tipos de schema markup o conteúdo suporta",
            "Mantenha nomes de entidades consistentes em todo o texto",
        ],
    },
];

/// Word substitutions the model must apply, as (avoid, prefer).
pub const PLAIN_LANGUAGE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("utilizar", "usar"),
    ("realizar", "fazer"),
    ("efetuar", "fazer"),
    ("adquirir", "comprar"),
    ("possuir", "ter"),
    ("visualizar", "ver"),
    ("solicitar", "pedir"),
    ("auxiliar", "ajudar"),
    ("finalizar", "terminar"),
    ("implementar", "colocar em prática"),
    ("no entanto", "mas"),
    ("a fim de", "para"),
    ("devido ao fato de que", "porque"),
    ("em virtude de", "por causa de"),
];

/// Everything the instruction is built from.
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub keyword: &'a str,
    pub content: &'a str,
    pub params: &'a RewriteParams,
    pub case_studies: &'a [CaseStudy],
    pub internal_links: &'a [InternalLink],
}

/// Build the full instruction sent to the model.
pub fn build_instruction(input: &PromptInput<'_>) -> String {
    let params = input.params;
    let mut out = String::with_capacity(input.content.len() + 8 * 1024);

    out.push_str(
        "Você é um redator especialista em SEO e em conteúdo para mecanismos de busca \
         e assistentes de IA. Reescreva o conteúdo original abaixo seguindo TODAS as regras.\n\n",
    );

    out.push_str("## REGRAS DE QUALIDADE\n\n");
    for (index, dimension) in QUALITY_DIMENSIONS.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, dimension.name);
        for rule in dimension.rules {
            let _ = writeln!(out, "   - {}", rule);
        }
        out.push('\n');
    }

    out.push_str("## PARÂMETROS\n\n");
    let _ = writeln!(out, "- Palavra-chave principal: \"{}\"", input.keyword);
    let _ = writeln!(
        out,
        "- Link de referência: {}",
        params.link_value().unwrap_or("nenhum")
    );
    let _ = writeln!(
        out,
        "- Empresa: {}",
        params.company().unwrap_or("não informada")
    );
    let _ = writeln!(out, "- Autor: {}", params.author().unwrap_or("não informado"));
    let _ = writeln!(
        out,
        "- Biografia do autor: {}",
        params.author_bio_text().unwrap_or("não informada")
    );
    let _ = writeln!(
        out,
        "- Tamanho: mantenha ou amplie o conteúdo; artigos com mais de {} palavras são preferidos",
        LONG_CONTENT_WORDS
    );
    let _ = writeln!(
        out,
        "- Meta description com no máximo {} caracteres",
        META_DESCRIPTION_MAX_CHARS
    );
    out.push('\n');

    out.push_str("## SUBSTITUIÇÕES OBRIGATÓRIAS (LINGUAGEM SIMPLES)\n\n");
    for (avoid, prefer) in PLAIN_LANGUAGE_SUBSTITUTIONS {
        let _ = writeln!(out, "- \"{}\" → \"{}\"", avoid, prefer);
    }
    out.push('\n');

    out.push_str("## CONTEÚDO ORIGINAL\n\n");
    out.push_str(input.content);
    out.push_str("\n\n");

    out.push_str("## FORMATO DE RESPOSTA\n\n");
    out.push_str(
        "Responda APENAS com um objeto JSON válido, sem markdown e sem texto fora do JSON, \
         exatamente neste formato:\n\n",
    );
    let schema = output_schema(input);
    out.push_str(&serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string()));
    out.push('\n');

    out
}

/// Example-filled JSON schema for the reply.
fn output_schema(input: &PromptInput<'_>) -> Value {
    let keyword = input.keyword;
    let mut schema = json!({
        "rewrittenContent": "<h1>Título com a palavra-chave</h1><p>Conteúdo reescrito em HTML...</p>",
        "helpfulnessScore": 85,
        "qualityScore": 80,
        "eatScore": 75,
        "structureScore": 82,
        "aiOptimizationScore": 78,
        "metaDescription": format!("Descrição de até {} caracteres sobre {}", META_DESCRIPTION_MAX_CHARS, keyword),
        "featuredImage": {
            "title": format!("Título da imagem sobre {}", keyword),
            "altText": format!("Texto alternativo descrevendo {}", keyword),
            "keywords": [keyword]
        },
        "faq": [
            { "question": format!("Pergunta frequente sobre {}?", keyword), "answer": "Resposta objetiva em 2 a 4 frases." }
        ],
        "caseStudies": input.case_studies,
        "richContent": {
            "graphics": [
                { "type": "bar_chart", "title": "Título do gráfico", "description": "Dados que o gráfico mostra" }
            ],
            "images": [
                { "description": "Descrição da imagem", "altText": "Texto alternativo", "placement": "Após a introdução" }
            ],
            "visualElements": [
                { "type": "checklist", "content": "Itens do checklist" }
            ]
        },
        "citations": [
            { "claim": "Afirmação apoiada pela fonte", "source": "Nome da fonte", "url": "https://fonte.exemplo" }
        ],
        "internalLinking": input.internal_links,
        "entities": {
            "brands": ["Marca citada"],
            "people": ["Pessoa citada"],
            "locations": ["Local citado"],
            "concepts": ["Conceito citado"]
        },
        "schemaMarkup": {
            "articleSchema": true,
            "faqSchema": true,
            "howToSchema": false,
            "organizationSchema": false,
            "personSchema": false
        }
    });

    if let Some(author) = input.params.author() {
        schema["authorBio"] = json!({
            "name": author,
            "description": "Biografia curta destacando a experiência do autor no tema"
        });
    }

    if let Some(company) = input.params.company() {
        schema["ctaSection"] = json!({
            "title": format!("Chamada para ação da {}", company),
            "description": "Texto convidando o leitor a agir",
            "buttonText": "Texto do botão",
            "link": input.params.link_value().unwrap_or("https://link-da-empresa")
        });
    }

    schema
}

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}
