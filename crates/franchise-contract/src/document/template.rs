//! Fixed clause text of the Studio Pro franchise agreement.
//!
//! Only the passages with interpolated values live in `render.rs`; everything here is
//! reproduced verbatim on every contract.

pub(crate) const TITLE: &str = "CONTRATO DE FRANQUIA VOLL PILATES STUDIOS";
pub(crate) const SUBTITLE: &str = "MODALIDADE STUDIO PRO";

pub(crate) const FRANCHISOR: &str = "WOLF GESTÃO DE ATIVOS LTDA – VOLL PILATES STUDIOS";
pub(crate) const FRANCHISOR_TAX_ID: &str = "CNPJ: 33.489.631/0001-75 – FRANQUEADORA";

pub(crate) const FRANCHISOR_QUALIFICATION: &str = "Pelo presente instrumento particular e na \
melhor forma do direito, de um lado WOLF GESTÃO DE ATIVOS LTDA – VOLL PILATES STUDIOS, pessoa \
jurídica de direito privado, com sede na cidade de Porto Alegre, na Avenida Diário de Notícias, \
200, sala 706, Porto Alegre, RS, devidamente inscrita no CNPJ sob o número 33.489.631/0001-75, \
neste ato representado pelo sócio Diretor HENRIQUE TONETO WOLF, brasileiro, divorciado, educador \
físico, portador do RG 3071458156 inscrito no CPF Nº 80577687034, residente e domiciliado em \
Porto Alegre-RS, doravante denominada FRANQUEADORA e";

pub(crate) const INITIAL_CONSIDERATIONS: [&str; 14] = [
    "A FRANQUEADORA desenvolveu um modelo de negócio voltado a implementação e gestão de Studios \
de Pilates, denominado VOLL PILATES STUDIOS, que atende o público com serviços de aulas de \
atividades físicas, dentre elas, o Método Pilates, Treinamento Funcional, Método Abdominal \
Hipopressivo e Treinamento Suspenso;",
    "A FRANQUEADORA disponibilizará seu know-how ao FRANQUEADO por meio de treinamentos e \
capacitações, sejam elas presenciais, escritos ou on-line.",
    "A MARCA VOLL PILATES STUDIOS foi depositada e deferida perante o Instituto Nacional de \
Propriedade Industrial e teve seu pedido de registro sob o nº 916.707.512 na classe NCL 11 (35) \
e será concedida ao FRANQUEADO em caráter não exclusivo, no território compreendido neste \
Contrato de Franquia celebrado entre as partes.",
    "A FRANQUEADORA é detentora dos direitos de uso da marca VOLL PILATES STUDIOS, conforme \
registro 916707512 constante no INPI e documento esse anexo a COF;",
    "O FRANQUEADO tem interesse em operar uma FRANQUIA VOLL PILATES STUDIOS mediante adoção de \
todo o modelo de negócio oferecido e se compromete a seguir na integralidade os manuais e \
orientações da FRANQUEADORA;",
    "O FRANQUEADO está ciente que a FRANQUEADORA não efetua a cobrança de Fundo Nacional de \
Marketing;",
    "O FRANQUEADO declara expressamente não ter recebido da FRANQUEADORA qualquer garantia de \
lucro;",
    "A FRANQUEADORA disponibilizou, através da COF - CIRCULAR DE OFERTA DE FRANQUIA, todos os \
esclarecimentos e informações sobre o negócio VOLL PILATES STUDIOS;",
    "O FRANQUEADO recebeu a COF - CIRCULAR DE OFERTA DE FRANQUIA, há mais de 10 (dez) dias, \
tendo estudado e concordado com todas as informações, dados, cláusulas e condições constantes \
nos referidos documentos e tendo dirimido suas dúvidas;",
    "A FRANQUEADORA em nenhum momento fez qualquer tipo de promessa e garantia quanto a \
resultados ou rentabilidade do negócio;",
    "Não há negócio sem risco. Ainda que se considere toda a estrutura e operação do sistema de \
franquias, não há por parte da FRANQUEADORA, qualquer promessa de resultado.",
    "DA NÃO OBRIGATORIEDADE DO SEGURO - A FRANQUEADORA não exige como obrigatório que o \
FRANQUEADO realize seguro do local e da sua atividade, contudo, em decorrência do negócio, \
sugere que o FRANQUEADO realize o seguro dependendo das variações de local e do número de \
alunos existentes.",
    "A FRANQUEADORA durante a vigência do contrato de franquia realizará a supervisão da rede, ou \
seja, poderá fazer visitas nas unidades, com o intuito de auxiliar no desempenho e na melhoria \
do negócio.",
    "A Taxa de Franquia de R$15.000,00 foi ISENTA ao franqueado.",
];

/// Considerations printed on the preamble page; the rest continue on the next page.
pub(crate) const CONSIDERATIONS_ON_PREAMBLE: usize = 6;

pub(crate) const CONSIDERATIONS_CLOSING: &str = "Assim, cientes e sabedoras de suas \
responsabilidades e direitos, as partes resolvem espontaneamente celebrar o presente CONTRATO \
DE FRANQUIA, nas seguintes condições dispostas nas páginas seguintes:";

pub(crate) const CLAUSES_1_TO_2_1: &[&str] = &[
    "1. OBJETO",
    "1.1. O OBJETO do presente CONTRATO é a concessão, pela FRANQUEADORA ao FRANQUEADO, o \
direito exclusivo, pessoal e intransferível, de utilizar fielmente o modelo de negócio VOLL \
PILATES STUDIOS, com as técnicas e KNOW-HOW específicos da MARCA, bem como toda a padronização \
e sinais distintivos contidos nos manuais e demais materiais de orientação.",
    "2. DIREITO PERSONALÍSSIMO, SOLIDARIEDADE E INDEPENDÊNCIA DAS PARTES",
    "2.1. O presente CONTRATO tem caráter personalíssimo, sendo firmado em Intuito Personae, \
sendo o FRANQUEADO responsável por concluir o treinamento inicial promovido pela FRANQUEADORA, \
bem como gerir ou administrar a sua UNIDADE, nos termos desse CONTRATO.",
];

pub(crate) const CLAUSES_2_2_TO_3: &[&str] = &[
    "2.2. A UNIDADE deverá ser implantada em até 180 dias a partir da assinatura deste \
instrumento ou em até 03 meses, após o envio de todos os equipamentos, mediante a constituição \
de empresa própria, pessoa jurídica da qual o FRANQUEADO detenha capital social superior a 50% \
e poderes de administrador.",
    "2.3. A UNIDADE será operada por pessoa jurídica diversa e independente da FRANQUEADORA, a \
ser constituída exclusivamente para esse fim, proibindo-se a inclusão de atividades estranhas a \
esse CONTRATO no objeto social.",
    "2.4. Em nenhum momento a FRANQUEADORA poderá ser responsabilizada por qualquer débito ou \
infração legal de responsabilidade da UNIDADE perante FORNECEDORES, COLABORADORES, governo ou \
terceiros.",
    "2.5. A EMPRESA FRANQUEADA deverá fazer cumprir todas as regras trabalhistas, contratuais e de \
conselhos de classe em que estiver inserta.",
    "2.6. Havendo qualquer tipo de processo administrativo, judicial ou extrajudicial relativo à \
atividade do FRANQUEADO e/ou da EMPRESA FRANQUEADA, a responsabilidade será exclusiva do \
FRANQUEADO e da EMPRESA FRANQUEADA.",
    "2.7. Caso a FRANQUEADORA seja demandada por qualquer pessoa ligada ao FRANQUEADO ou a \
EMPRESA FRANQUEADA, é dever destes requerer imediatamente a exclusão da FRANQUEADORA do polo \
passivo, arcando com todo o dano que venha a causar.",
    "3. PRAZO DE CONTRATO E CONDIÇÃO DE RENOVAÇÃO",
    "3.1. O presente CONTRATO terá o prazo de vigência de 05 (cinco) anos, a contar da data de \
sua assinatura.",
    "3.2. Ao final do contrato, o mesmo poderá ser renovado por igual período, sem cobrança de \
taxa de renovação de franquia.",
];

pub(crate) const CLAUSES_4_TO_5_1: &[&str] = &[
    "I. Contudo, para que ocorra a renovação do Contrato de Franquia o FRANQUEADO deverá estar \
adimplente em relação aos royalties e eventuais débitos, bem como cumprindo as demais regras \
descritas no contrato.",
    "4. TERRITÓRIO",
    "4.1. A FRANQUEADORA faz a concessão, tratada na cláusula 1ª acima, à FRANQUEADA, durante o \
prazo deste contrato, concedendo exclusividade de atuação no território assim determinado.",
    "4.2. A atuação da UNIDADE VOLL PILATES STUDIOS será permitida exclusivamente no endereço da \
UNIDADE, não sendo autorizada a realização de serviços ou venda fora do estabelecimento.",
    "4.3. Em cidades com até 30 mil habitantes o FRANQUEADO terá exclusividade de atuação da \
cidade.",
    "4.4. Nas cidades com população superior a 30 mil habitantes deverá ser respeitado uma \
distância mínima de 1km de cada UNIDADE existente.",
    "4.5. Em caso de rescisão do contrato de franquia ou ao seu término sem renovação, o \
FRANQUEADO obriga-se a não explorar a prestação de serviços de Pilates no mesmo ponto \
comercial em que está instalada a UNIDADE FRANQUEADA.",
    "4.6. Assim que aprovado o território, a FRANQUEADA deverá informar para a FRANQUEADORA o \
LOCAL e solicitar a assinatura de um aditivo Contratual a fim de resguardar direitos \
territoriais.",
    "5. SERVIÇOS E PRODUTOS",
    "5.1. O ROL DE SERVIÇOS já previamente autorizados e disponíveis para utilização do \
FRANQUEADO na UNIDADE: Pilates; Mat Pilates; Pilates em Grupo; MAH (Método Abdominal \
Hipopressivo); VOLL Suspension e Treinamento Funcional.",
];

pub(crate) const CLAUSES_5_2_TO_6: &[&str] = &[
    "5.2. A FRANQUEADORA poderá incluir novos serviços e produtos dentro do ROL de serviços e \
permitirá ao FRANQUEADO que inclua em sua UNIDADE.",
    "5.3. As atividades a seguir já estão previamente liberadas pela FRANQUEADORA: Treinamento \
Funcional, musculação, estética e dermato-funcional, clínica médica e fisioterapia, nutrição e \
psicologia.",
    "5.4. Qualquer outra atividade que não esteja elencada no item acima somente poderá ser \
explorada na UNIDADE mediante autorização expressa da FRANQUEADORA.",
    "6. IMPLANTAÇÃO DA UNIDADE E PADRÕES ARQUITETÔNICOS",
    "6.1. A UNIDADE deverá ser implantada e operada com zelo e profissionalismo, seguindo as \
orientações da FRANQUEADORA por meio de manuais ou vídeo-manuais.",
    "6.2. Responsabilidade pelos Projetos e Execução da Obra - A FRANQUEADORA disponibiliza aos \
FRANQUEADOS a possibilidade de contratar profissionais e empresas parceiros da marca, \
previamente homologados.",
    "6.2.1. Os projetos arquitetônicos são elaborados por profissionais autônomos e \
independentes, devidamente habilitados junto ao CAU.",
    "6.2.2. Os projetos elaborados serão entregues em formato digital, por meio eletrônico.",
    "6.2.3. A arquiteta homologada se compromete a prestar suporte técnico à distância.",
    "6.2.4. O atendimento remoto será limitado a orientações sobre o conteúdo do projeto.",
    "6.2.5. A execução da obra é de responsabilidade exclusiva do FRANQUEADO.",
];

pub(crate) const CLAUSES_6_2_6_TO_7: &[&str] = &[
    "6.2.6 O suporte técnico prestado pelos arquitetos parceiros limita-se a esclarecimentos \
remotos sobre o conteúdo do projeto.",
    "6.2.7 Qualquer serviço adicional deverá ser objeto de contratação específica e independente \
entre o franqueado e o profissional responsável.",
    "6.2.8 A FRANQUEADORA atua exclusivamente como intermediadora da indicação técnica.",
    "7. DIREITOS E DEVERES DO FRANQUEADO",
    "7.1. Com a assinatura do presente CONTRATO, o FRANQUEADO terá direito a:",
    "7.1.2 Receber ou acessar os Manuais da Franquia;",
    "7.1.3 Utilizar a marca para todas as atividades inerentes à franquia, durante a vigência do \
contrato;",
    "7.1.4 Receber treinamento para administração e operação de sua UNIDADE FRANQUEADA;",
    "7.1.5 Receber apoio e orientação da FRANQUEADORA;",
    "7.1.6 Realizar cursos e capacitações do Grupo VOLL com 50% de desconto;",
    "7.1.7 Receber acesso a Plataforma do FRANQUEADO.",
    "7.1.8 Receber um projeto arquitetônico, desenvolvido por arquiteta homologada;",
    "7.2 São deveres do FRANQUEADO:",
    "7.2.2 Aplicar em sua UNIDADE os conhecimentos repassados pela FRANQUEADORA;",
    "7.2.3 Manter absoluto sigilo em relação a toda e qualquer informação contida em \
treinamentos e/ou manuais;",
    "7.2.4 Não explorar atividade concorrente durante a vigência do CONTRATO;",
    "7.2.5 Fornecer documentos e prestar informações sobre o desempenho da UNIDADE FRANQUEADA em \
prazo máximo de 48 horas;",
    "7.2.6 Utilizar, preencher e manter atualizado diariamente o Sistema de Gestão do seu Studio;",
];

pub(crate) const CLAUSES_7_2_7_TO_9_2: &[&str] = &[
    "7.2.7 Caso o FRANQUEADO opte em RECEBER cursos da FRANQUEADORA aos finais de semana, \
deverá ceder o espaço de sua UNIDADE para a realização dos cursos;",
    "7.2.8 Efetuar investimentos em marketing local, de acordo com as orientações da \
FRANQUEADORA;",
    "7.2.9 Informar a FRANQUEADORA sobre todas as suas ações de pré-inauguração, bem como o dia \
da Inauguração da sua UNIDADE.",
    "8. FORNECEDORES",
    "8.1. Ao FRANQUEADO é obrigatório adquirir produtos ou serviços exclusivamente dos \
FORNECEDORES homologados pela FRANQUEADORA.",
    "8.2. O FRANQUEADO poderá realizar a aquisição de produto ou serviço não-homologado, caso não \
haja fornecedor homologado específico.",
    "9. DIREITOS E DEVERES DA FRANQUEADORA",
    "9.2 São direitos da FRANQUEADORA:",
    "9.2.1 A possibilidade de retirar acessos, materiais e o suporte ao FRANQUEADO, caso o mesmo \
não esteja adimplente com os valores dos ROYALTIES;",
    "9.2.2 Inspecionar as instalações do FRANQUEADO sempre que desejar;",
    "9.2.3 Quando o FRANQUEADO optar em RECEBER cursos, utilizar o espaço da UNIDADE FRANQUEADA \
para ministração dos cursos, somente aos finais de semana e com 30 (trinta) dias de \
antecedência, com 100% de abatimento nos Royalties daquele mês.",
];

pub(crate) const CLAUSES_9_3_TO_10: &[&str] = &[
    "9.3 São deveres da FRANQUEADORA:",
    "9.3.1 Fornecer os Manuais da Franquia;",
    "9.3.2 Prestar auxílio na implantação e manutenção da UNIDADE FRANQUEADA;",
    "9.3.3 Disponibilizar materiais de marketing para uso do FRANQUEADO;",
    "9.3.4 Orientar e dar apoio ao FRANQUEADO, sempre que o mesmo requisitar em horário \
comercial;",
    "9.3.5 Prestar assistência para que a UNIDADE obtenha desempenho adequado;",
    "9.3.6 Disponibilizar acesso ao portal do FRANQUEADO;",
    "9.3.7 Disponibilizar o site oficial da UNIDADE, bem como a Fanpage já configurada.",
    "9.3.8 Realizar apoio nos processos de abertura da franquia;",
    "9.3.9 Realizar suporte comercial e de marketing de forma não presencial e com agendamento;",
    "9.3.10 Análise e orientação acerca da escolha da instalação do ponto comercial.",
    "10. TRANSFERÊNCIA DA UNIDADE",
    "10.1 Caso o FRANQUEADO pretenda vender sua UNIDADE a terceiros, deverá antes oferecer à \
FRANQUEADORA a UNIDADE.",
    "10.2 Caso não se proceda a cessão da UNIDADE o próprio FRANQUEADO deverá procurar o novo \
candidato a FRANQUEADO.",
    "10.3 No caso de transferência da unidade franqueada a terceiros, será devida uma Taxa de \
Revenda no valor fixo de R$ 8.000,00 (oito mil reais).",
];

pub(crate) const CLAUSE_11_HEADING: &str = "11. INVESTIMENTO, RECEBIMENTOS E TAXAS";
pub(crate) const CLAUSE_11_1: &str =
    "11.1. Deverá ser pago o valor de KIT de equipamentos e serviços:";
pub(crate) const CLAUSE_11_PAYMENT_INTRO: &str = "Que será pago conforme a seguir:";
pub(crate) const EQUIPMENT_PAYEE: &str =
    "➢ VALORES PAGOS DIRETAMENTE PARA A FÁBRICA DE EQUIPAMENTOS:";
pub(crate) const FRANCHISOR_PAYEE: &str = "➢ VALORES PAGOS DIRETAMENTE PARA A FRANQUEADORA:";
pub(crate) const CLAUSE_11_AGREED: &str = "Que restou pactuada da seguinte forma:";
pub(crate) const CLAUSE_11_2_1: &str = "11.2.1 As partes estabelecem que havendo atraso no \
pagamento, serão cobrados juros de mora na proporção de 1% (um por cento) ao mês pro rate die, \
multa moratória de 10% sobre o saldo devedor, cumulados esses a correção monetária pelo IGPM.";

pub(crate) const CLAUSES_11_2_3_TO_11_6_5: &[&str] = &[
    "11.2.3 Produtos que o FRANQUEADO recebe no KIT INICIAL:",
    "11.2.4 04 aparelhos principais: Cadillac, Reformer, Step Chair e Ladder Barrel da marca \
Equipilates;",
    "11.2.5 01 caixa do Reformer; 01 Prancha de salto, 01 Plataforma de extensão",
    "11.2.6 01 bola suíça de 65cm da marca LiveUp, Odin ou similar;",
    "11.2.7 03 unidades de banda elástica (fraca, média e forte);",
    "11.2.8 02 tonning balls de 1kg ou 2kg;",
    "11.2.9 01 overball de 25cm;",
    "11.2.10 2 latas de tinta de 3,6L na cor oficial VOLL PILATES STUDIOS;",
    "11.2.11 01 Painel interno para a recepção do studio com a Logo VOLL PILATES STUDIOS.",
    "11.3 Na hipótese de rescisão contratual, os equipamentos, após a realização de todos os \
pagamentos, permanecerão com o FRANQUEADO.",
    "11.4 O FRANQUEADO terá um prazo de até 12 meses, contados da assinatura, para solicitar a \
entrega dos equipamentos.",
    "11.5 O FRANQUEADO para solicitar os equipamentos deverá ter adimplido 70% do valor total \
descrito no item 11.1.",
    "11.6 Serviços que o FRANQUEADO recebe:",
    "11.6.1 Página Internet da UNIDADE dentro do site oficial VOLLPILATES STUDIOS;",
    "11.6.2 Acesso ao projeto arquitetônico padronizado da VOLL PILATES STUDIOS;",
    "11.6.3 Acesso a Plataforma de Marketing e Treinamentos da VOLL PILATES STUDIOS;",
    "11.6.4 Manual de Implantação do seu Studio;",
    "11.6.5 Direito de ser representante de vendas VOLL PILATES GROUP.",
];

pub(crate) const CLAUSES_11_6_6_TO_11_7: &[&str] = &[
    "11.6.6 Serviço de Geolocalização.",
    "11.7 Curso Presencial que o FRANQUEADO recebe:",
    "11.7.1 Formação em Pilates pela Espaço Vida Pilates (Grupo VOLL) ou 1 Bolsa 100% a outro \
curso da VOLL PILATES caso já tenha a Formação em Pilates;",
    "11.7.2 Dois cursos online:",
    "11.7.2.1 10 módulos do curso de avaliação;",
    "11.7.2.2 01 curso de Excelência em coluna.",
    "11.8 Royalties:",
    "Royalties são cobrados no mês seguinte da Inauguração do Studio e são pagamentos mensais \
feitos pelo FRANQUEADO a FRANQUEADORA, garantindo o uso contínuo da marca, produtos, serviços, \
treinamentos e suporte oferecidos.",
];

pub(crate) const ROYALTY_EXPLANATION: &[&str] = &[
    "Abaixo, explicaremos como funciona o sistema inovador de Royalties da VOLL STUDIOS:",
    "O FRANQUEADO VOLL Studios tem a possibilidade de escolher se deseja ou não receber cursos da \
VOLL PILATES em seu Studio e esta escolha interfere diretamente no valor de Royalties.",
];

pub(crate) const PARAGRAPH_ONE: &str = "Parágrafo Primeiro. O valor acima estipulado poderá \
sofrer, após o transcurso de 12 (doze) meses da inauguração da unidade, a atualização monetária \
anual pela variação positiva do IPCA ou do IGP-M, sempre prevalecendo, em favor da UNIDADE \
FRANQUEADA, o índice de menor valor entre os mencionados.";

pub(crate) const CLAUSE_11_9_HEADING: &str =
    "11.9 O FRANQUEADO escolheu a seguinte opção de Royalties:";
pub(crate) const NO_ROYALTY_SELECTED: &str = "Opção não selecionada";

pub(crate) const CLAUSES_11_9_1_TO_11_9_4: &[&str] = &[
    "11.9.1 O valor de royalties começará a ser cobrado no mês subsequente a realização da \
inauguração, e assim consequentemente nos meses posteriores.",
    "11.9.2 Em caso de atraso superior a 05 (cinco) dias úteis, os títulos não pagos poderão ser \
protestados;",
    "11.9.3 O inadimplemento por prazo superior a 60 (sessenta) dias fica sob pena de ter o \
presente CONTRATO rescindido.",
    "11.9.4 Havendo atraso no pagamento dos Royalties, serão cobrados juros de mora de 1% (um por \
cento) ao mês pro rate die e multa moratória de 10% sobre o saldo devedor.",
];

pub(crate) const CLAUSES_11_9_5_TO_13_1: &[&str] = &[
    "11.9.5 Sistemas de gestão:",
    "11.9.6 O FRANQUEADO utilizará apenas o sistema de gestão homologado pela FRANQUEADORA \
(MARCA: SEUFISIO).",
    "11.9.7 Sistemas de gestão possibilitam cadastrar clientes, atividades, grade de horários e \
contratos com os alunos;",
    "11.9.8 O sistema de gestão varia de valor conforme o plano escolhido pelo FRANQUEADO.",
    "11.9.9 O preenchimento com informações no sistema é obrigatório.",
    "12. NÃO CONCORRÊNCIA E SIGILO DE INFORMAÇÕES",
    "12.1 Após o encerramento do contrato de franquia, o EX-FRANQUEADO compromete-se a NÃO \
explorar a prestação de serviços de Studio de Pilates no mesmo ponto comercial;",
    "12.2 O FRANQUEADO poderá atuar com serviços de Pilates em outros pontos comerciais, desde \
que não utilize marca similar, padrão visual e operacional da franquia;",
    "12.3 O descumprimento das cláusulas supracitadas acarretará multa de 3 (três) vezes o valor \
da taxa de franquia vigente à época da infração;",
    "12.4 O FRANQUEADO manterá confidencialidade sobre todas as informações a que teve acesso, \
conforme o artigo 195 da Lei 9.279/1996.",
    "13. DA EVENTUAL SUCESSÃO",
    "13.1 No caso de eventual sucessão ou saída de qualquer sócio do FRANQUEADO, a FRANQUEADORA \
precisa aprovar a entrada de um novo proprietário.",
];

pub(crate) const CLAUSES_13_2_TO_14_4: &[&str] = &[
    "13.2 O contrato de franquia não poderá ser cedido, total ou parcialmente, sem prévia e \
expressa autorização da FRANQUEADORA.",
    "13.3 É expressamente vedado ao FRANQUEADO transferir ou ceder os direitos e obrigações \
ajustados no contrato de franquia.",
    "13.4 Na hipótese de alienação de participação societária, a FRANQUEADORA poderá considerar \
rescindido o contrato de franquia, sem direito a indenização.",
    "13.5 Exclui-se desta restrição a transferência para sócio já integrante do quadro social.",
    "14. HIPÓTESES DE INFRAÇÃO CONTRATUAL, RESCISÃO ANTECIPADA E CLÁUSULA PENAL",
    "14.1. O FRANQUEADO poderá rescindir o contrato em qualquer hipótese, desde que avise a \
FRANQUEADORA com antecedência mínima de 90 (noventa) dias;",
    "14.2. O valor de multa por rescisão antecipada será de 50% (cinquenta por cento) sobre os \
valores de royalties restantes até o final de contrato;",
    "14.3. Em caso de descumprimento pontual de qualquer cláusula, a FRANQUEADORA poderá \
NOTIFICAR o FRANQUEADO e conceder prazo para sanar a atividade infratora;",
    "14.4. São consideradas infrações graves e suficientes motivos para rescisão imediata: o uso \
inadequado da marca; a aquisição de produtos de fornecedores não homologados; o atraso no \
pagamento dos royalties superior a 2 (dois) meses; a paralisação ou suspensão das atividades \
sem autorização; a falência ou insolvência de qualquer das partes; a exposição vergonhosa da \
marca.",
];

pub(crate) const CLAUSES_14_5_TO_15: &[&str] = &[
    "14.5. As rescisões de contrato por infrações dão direito a aplicação de multa no valor de R$ \
8.000,00 (oito mil reais);",
    "14.6. O presente contrato poderá ser rescindido por comum acordo entre as partes, mediante \
distrato, na presença de duas testemunhas.",
    "14.7. Em qualquer caso de rescisão de contrato, os efeitos serão imediatos.",
    "15. DISPOSIÇÕES GERAIS",
    "15.1. A tolerância quanto ao inadimplemento das obrigações contratuais não implica em \
novação, constituindo mera liberalidade;",
    "15.2. O presente contrato poderá ser alterado por comum acordo entre as partes, por meio de \
aditivo por escrito;",
    "15.3. O presente contrato tem validade e vigência desde sua assinatura, independentemente \
de ser levado a registro;",
    "15.4. A cessão dos direitos relativos a este CONTRATO somente poderá se efetivar após prévio \
e expresso consentimento da FRANQUEADORA;",
    "15.5. O FRANQUEADO declara entender que o presente contrato tem caráter personalíssimo.",
];

pub(crate) const CLAUSE_16: &[&str] = &[
    "16. ELEIÇÃO DE FORO",
    "16.1 As partes elegem o Foro da cidade (São Paulo/SP), para dirimir quaisquer dúvidas ou \
questões oriundas do presente instrumento;",
    "16.2 A lei aplicável à controvérsia será a 13.966/2019 – Lei de Franquias. E estando assim \
acordadas, as partes assinam o presente CONTRATO DE FRANQUIA na presença das testemunhas \
abaixo, para que produza imediatamente seus efeitos.",
];

pub(crate) const FRANCHISEE_ROLE: &str = "FRANQUEADO(A)";
