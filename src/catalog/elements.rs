//! The element data itself. Authoring order is display order.
//!
//! Descriptions are Portuguese documentation text; category
//! labels double as grouping keys for the filter engine.

use super::ElementEntry;

const BASICOS: &str = "Básicos";
const METADADOS: &str = "Metadados";
const ESTRUTURAIS: &str = "Estruturais";
const TEXTO: &str = "Texto";
const LISTAS: &str = "Listas";
const MIDIA: &str = "Mídia";
const FORMULARIOS: &str = "Formulários";
const LINKS: &str = "Links";
const SEPARACAO: &str = "Separação";
const TABELAS: &str = "Tabelas";

/// Entry with no example or attribute list.
const fn entry(
    tag: &'static str,
    description: &'static str,
    category: &'static str,
) -> ElementEntry {
    ElementEntry {
        tag,
        description,
        category,
        example: None,
        attributes: &[],
    }
}

pub(super) const ELEMENTS: &[ElementEntry] = &[
    // Básicos
    entry(
        "<!DOCTYPE html>",
        "Declara o tipo de documento e a versão do HTML (HTML5).",
        BASICOS,
    ),
    ElementEntry {
        tag: "<html>",
        description: "Elemento raiz de uma página HTML. O atributo lang define o idioma do documento.",
        category: BASICOS,
        example: Some("<html lang=\"pt-BR\">"),
        attributes: &["lang"],
    },
    entry("<head>", "Contém meta-informações sobre o documento HTML.", BASICOS),
    entry("<body>", "Contém todo o conteúdo visível do documento HTML.", BASICOS),
    // Metadados
    ElementEntry {
        tag: "<meta>",
        description: "Especifica metadados sobre o documento HTML.",
        category: METADADOS,
        example: Some("<meta charset=\"UTF-8\" />"),
        attributes: &["charset", "name", "content"],
    },
    entry(
        "<title>",
        "Define o título do documento HTML (aparece na guia do navegador).",
        METADADOS,
    ),
    ElementEntry {
        tag: "<link>",
        description: "Vincula recursos externos ao documento.",
        category: METADADOS,
        example: Some("<link rel=\"stylesheet\" href=\"style.css\">"),
        attributes: &["rel", "href"],
    },
    // Estruturais
    entry(
        "<header>",
        "Representa conteúdo introdutório ou links de navegação.",
        ESTRUTURAIS,
    ),
    entry("<nav>", "Seção que fornece links de navegação.", ESTRUTURAIS),
    entry("<main>", "Representa o conteúdo principal do documento.", ESTRUTURAIS),
    entry("<section>", "Seção autônoma de conteúdo.", ESTRUTURAIS),
    entry(
        "<article>",
        "Conteúdo independente e auto-contido (como post de blog).",
        ESTRUTURAIS,
    ),
    entry(
        "<aside>",
        "Conteúdo relacionado indiretamente ao conteúdo principal.",
        ESTRUTURAIS,
    ),
    entry("<footer>", "Rodapé para o documento ou seção.", ESTRUTURAIS),
    entry("<div>", "Contêiner genérico para agrupamento e estilização.", ESTRUTURAIS),
    // Texto
    entry("<h1>", "Cabeçalho de nível 1 (mais importante).", TEXTO),
    entry("<h2>", "Cabeçalho de nível 2.", TEXTO),
    entry("<h3>", "Cabeçalho de nível 3.", TEXTO),
    entry("<h4>", "Cabeçalho de nível 4.", TEXTO),
    entry("<h5>", "Cabeçalho de nível 5.", TEXTO),
    entry("<h6>", "Cabeçalho de nível 6.", TEXTO),
    entry("<p>", "Parágrafo de texto.", TEXTO),
    entry("<span>", "Contêiner inline para estilização de partes do texto.", TEXTO),
    entry(
        "<strong>",
        "Texto com forte importância (normalmente em negrito).",
        TEXTO,
    ),
    entry("<b>", "Texto em negrito (sem ênfase semântica).", TEXTO),
    entry("<em>", "Texto com ênfase (normalmente em itálico).", TEXTO),
    entry("<i>", "Texto em itálico (sem ênfase semântica).", TEXTO),
    // Listas
    entry("<ul>", "Lista não ordenada.", LISTAS),
    entry("<ol>", "Lista ordenada (numerada).", LISTAS),
    entry("<li>", "Item de lista.", LISTAS),
    entry("<dl>", "Lista de definições.", LISTAS),
    entry("<dt>", "Termo de definição.", LISTAS),
    entry("<dd>", "Descrição de definição.", LISTAS),
    // Mídia
    ElementEntry {
        tag: "<img>",
        description: "Incorporação de imagens.",
        category: MIDIA,
        example: Some("<img src=\"image.jpg\" alt=\"Descrição\">"),
        attributes: &["src", "alt", "width", "height"],
    },
    ElementEntry {
        tag: "<video>",
        description: "Incorporação de vídeo nativo.",
        category: MIDIA,
        example: None,
        attributes: &["src", "controls", "autoplay"],
    },
    ElementEntry {
        tag: "<audio>",
        description: "Incorporação de áudio nativo.",
        category: MIDIA,
        example: None,
        attributes: &["src", "controls", "autoplay"],
    },
    ElementEntry {
        tag: "<iframe>",
        description: "Incorporação de outro documento HTML.",
        category: MIDIA,
        example: None,
        attributes: &["src", "width", "height"],
    },
    entry("<svg>", "Gráficos vetoriais escaláveis.", MIDIA),
    ElementEntry {
        tag: "<canvas>",
        description: "Área para renderização de gráficos via JavaScript.",
        category: MIDIA,
        example: None,
        attributes: &["width", "height"],
    },
    // Formulários
    ElementEntry {
        tag: "<form>",
        description: "Seção para controles interativos de envio de informações.",
        category: FORMULARIOS,
        example: None,
        attributes: &["action", "method"],
    },
    ElementEntry {
        tag: "<input>",
        description: "Campo de entrada para dados.",
        category: FORMULARIOS,
        example: Some("<input type=\"text\" name=\"nome\">"),
        attributes: &["type", "name", "value", "placeholder"],
    },
    ElementEntry {
        tag: "<label>",
        description: "Legenda para um item de interface.",
        category: FORMULARIOS,
        example: None,
        attributes: &["for"],
    },
    ElementEntry {
        tag: "<button>",
        description: "Botão clicável.",
        category: FORMULARIOS,
        example: None,
        attributes: &["type"],
    },
    ElementEntry {
        tag: "<textarea>",
        description: "Área de texto multilinha.",
        category: FORMULARIOS,
        example: None,
        attributes: &["rows", "cols"],
    },
    entry("<select>", "Menu suspenso.", FORMULARIOS),
    ElementEntry {
        tag: "<option>",
        description: "Opção em um menu suspenso.",
        category: FORMULARIOS,
        example: None,
        attributes: &["value"],
    },
    entry("<fieldset>", "Agrupamento de controles de formulário.", FORMULARIOS),
    entry("<legend>", "Legenda para um fieldset.", FORMULARIOS),
    // Links
    ElementEntry {
        tag: "<a>",
        description: "Cria um hiperlink para outra página ou seção.",
        category: LINKS,
        example: Some("<a href=\"https://example.com\">Link</a>"),
        attributes: &["href", "target"],
    },
    // Separação
    entry("<hr>", "Quebra temática entre elementos.", SEPARACAO),
    entry("<br>", "Quebra de linha.", SEPARACAO),
    // Tabelas
    entry("<table>", "Tabela de dados.", TABELAS),
    entry("<tr>", "Linha de tabela.", TABELAS),
    entry("<td>", "Célula de dados da tabela.", TABELAS),
    entry("<th>", "Célula de cabeçalho da tabela.", TABELAS),
    entry("<thead>", "Cabeçalho da tabela.", TABELAS),
    entry("<tbody>", "Corpo da tabela.", TABELAS),
    entry("<tfoot>", "Rodapé da tabela.", TABELAS),
];
